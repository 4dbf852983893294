// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Private Range Classifier
 * Classifies request targets as private/internal for SSRF scanning
 *
 * Covered ranges:
 * - RFC 1918 private networks (10/8, 172.16/12, 192.168/16)
 * - Loopback (127/8, ::1) and unspecified (0/8, ::)
 * - Link-local (169.254/16, fe80::/10)
 * - Shared address space / CGNAT (100.64/10, covers Alibaba metadata)
 * - IPv6 unique-local (fc00::/7, covers AWS IMDSv6 fd00:ec2::254)
 * - IPv4-mapped IPv6 classified by the embedded IPv4 address
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Fixed CIDR set deciding whether an outbound target is worth scanning
/// for SSRF. This is false-positive control, not a strict SSRF definition:
/// a request to a public host is never flagged.
pub struct PrivateRangeClassifier;

/// Cloud metadata addresses, matched exactly by the stored SSRF scanner
pub const METADATA_ADDRESSES: [&str; 4] = [
    // AWS / Azure / GCP / DigitalOcean / Oracle instance metadata
    "169.254.169.254",
    // AWS ECS task metadata and credentials endpoint
    "169.254.170.2",
    // Alibaba Cloud instance metadata
    "100.100.100.200",
    // AWS IMDS over IPv6
    "fd00:ec2::254",
];

impl PrivateRangeClassifier {
    /// Classify a URI host. IP literals are checked against the CIDR set;
    /// localhost names are always private; other hostnames are not
    /// classified (no DNS resolution happens here).
    pub fn is_private_host(host: &str) -> bool {
        let host = host.trim_start_matches('[').trim_end_matches(']');

        if host.eq_ignore_ascii_case("localhost")
            || host.to_ascii_lowercase().ends_with(".localhost")
            || host.eq_ignore_ascii_case("localhost.localdomain")
        {
            return true;
        }

        match host.parse::<IpAddr>() {
            Ok(ip) => Self::is_private_ip(&ip),
            Err(_) => false,
        }
    }

    pub fn is_private_ip(ip: &IpAddr) -> bool {
        match ip {
            IpAddr::V4(v4) => Self::is_private_v4(v4),
            IpAddr::V6(v6) => Self::is_private_v6(v6),
        }
    }

    fn is_private_v4(ip: &Ipv4Addr) -> bool {
        let octets = ip.octets();
        ip.is_loopback()
            || ip.is_private()
            || ip.is_link_local()
            || octets[0] == 0
            // 100.64.0.0/10 shared address space
            || (octets[0] == 100 && (64..128).contains(&octets[1]))
    }

    fn is_private_v6(ip: &Ipv6Addr) -> bool {
        if let Some(mapped) = ip.to_ipv4_mapped() {
            return Self::is_private_v4(&mapped);
        }
        let segments = ip.segments();
        ip.is_loopback()
            || ip.is_unspecified()
            // fc00::/7 unique local
            || (segments[0] & 0xfe00) == 0xfc00
            // fe80::/10 link local
            || (segments[0] & 0xffc0) == 0xfe80
    }

    /// Exact-match check against the cloud metadata deny-list
    pub fn is_metadata_address(ip: &IpAddr) -> bool {
        METADATA_ADDRESSES
            .iter()
            .filter_map(|addr| addr.parse::<IpAddr>().ok())
            .any(|deny| match (ip, &deny) {
                (IpAddr::V4(a), IpAddr::V4(b)) => a == b,
                (IpAddr::V6(a), IpAddr::V6(b)) => a == b,
                // IPv4-mapped IPv6 form of a denied IPv4 address
                (IpAddr::V6(a), IpAddr::V4(b)) => a.to_ipv4_mapped().as_ref() == Some(b),
                (IpAddr::V4(_), IpAddr::V6(_)) => false,
            })
    }
}
