//! Hard-coded peer seeds.

use serde::Serialize;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};

/// A fixed seed: IPv6 (or IPv4-mapped) address and port.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    /// An IPv4 seed stored in its IPv4-mapped IPv6 form.
    pub const fn ipv4(octets: [u8; 4], port: u16) -> Self {
        let mut addr = [0u8; 16];
        addr[10] = 0xff;
        addr[11] = 0xff;
        addr[12] = octets[0];
        addr[13] = octets[1];
        addr[14] = octets[2];
        addr[15] = octets[3];
        Self { addr, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        let v6 = Ipv6Addr::from(self.addr);
        let ip = match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(v6),
        };
        SocketAddr::new(ip, self.port)
    }
}
