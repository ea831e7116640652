//! LAN address discovery and port selection (component I).

use rand::rngs::OsRng;
use rand::Rng;
use std::net::{IpAddr, UdpSocket};

pub const DEFAULT_PORT: u16 = 42069;

/// Discovers the LAN-facing address by opening a UDP socket toward an external host
/// and reading back the local endpoint the OS chose for it. No packet is actually
/// sent; `connect` on a UDP socket only picks a route.
pub fn discover_lan_address() -> std::io::Result<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.connect(("8.8.8.8", 80))?;
    Ok(socket.local_addr()?.ip())
}

/// Wraps an IPv6 literal in brackets for use in a URL; IPv4 is returned unchanged.
pub fn display_host(addr: IpAddr) -> String {
    match addr {
        IpAddr::V4(v4) => v4.to_string(),
        IpAddr::V6(v6) => format!("[{v6}]"),
    }
}

/// Picks the port to bind: `42069` by default, or a cryptographically chosen port
/// in `[1025, 65535]` when `random_port` is set.
pub fn select_port(random_port: bool) -> u16 {
    if random_port {
        OsRng.gen_range(1025..=65535)
    } else {
        DEFAULT_PORT
    }
}
