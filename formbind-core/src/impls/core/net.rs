use core::any::Any;
use core::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};

use crate::{Form, Shape};

crate::text_decodable_via_from_str!(
    IpAddr,
    Ipv4Addr,
    Ipv6Addr,
    SocketAddr,
    SocketAddrV4,
    SocketAddrV6
);

// Addresses have no `Default`; the unspecified address with port 0 stands in.

fn ipv4_zero() -> Option<Box<dyn Any>> {
    Some(Box::new(Ipv4Addr::UNSPECIFIED))
}

fn ipv6_zero() -> Option<Box<dyn Any>> {
    Some(Box::new(Ipv6Addr::UNSPECIFIED))
}

fn ip_zero() -> Option<Box<dyn Any>> {
    Some(Box::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED)))
}

fn socket_v4_zero() -> Option<Box<dyn Any>> {
    Some(Box::new(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0)))
}

fn socket_v6_zero() -> Option<Box<dyn Any>> {
    Some(Box::new(SocketAddrV6::new(Ipv6Addr::UNSPECIFIED, 0, 0, 0)))
}

fn socket_zero() -> Option<Box<dyn Any>> {
    Some(Box::new(SocketAddr::V4(SocketAddrV4::new(
        Ipv4Addr::UNSPECIFIED,
        0,
    ))))
}

impl Form for IpAddr {
    const SHAPE: &'static Shape = &const { text_shape!(IpAddr, "IpAddr").with_zero(ip_zero) };
}

impl Form for Ipv4Addr {
    const SHAPE: &'static Shape = &const { text_shape!(Ipv4Addr, "Ipv4Addr").with_zero(ipv4_zero) };
}

impl Form for Ipv6Addr {
    const SHAPE: &'static Shape = &const { text_shape!(Ipv6Addr, "Ipv6Addr").with_zero(ipv6_zero) };
}

impl Form for SocketAddr {
    const SHAPE: &'static Shape =
        &const { text_shape!(SocketAddr, "SocketAddr").with_zero(socket_zero) };
}

impl Form for SocketAddrV4 {
    const SHAPE: &'static Shape =
        &const { text_shape!(SocketAddrV4, "SocketAddrV4").with_zero(socket_v4_zero) };
}

impl Form for SocketAddrV6 {
    const SHAPE: &'static Shape =
        &const { text_shape!(SocketAddrV6, "SocketAddrV6").with_zero(socket_v6_zero) };
}
