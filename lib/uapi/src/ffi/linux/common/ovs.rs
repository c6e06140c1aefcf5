//! # Open vSwitch Netlink Interface
//!
//! The Open vSwitch kernel module is driven through four generic
//! netlink families: datapaths, vports, flows, and packets. Each family
//! is identified by name and carries commands plus typed attributes.
//! This module provides the family names, the command and attribute
//! enumerations, and the fixed-layout structures exchanged as attribute
//! payloads.
//!
//! The `ovs_`/`OVS_` prefix is stripped. The integer width of the
//! transposed enumerations follows the field that carries the value on
//! the wire: generic-netlink commands are `u8`, attribute types are
//! `u16`, and enumerations stored in attribute payloads are `u32`
//! (or `u8` where the payload is a single byte). Fields of network
//! protocols keep their big-endian encoding via the `B16`/`B32` types.

use super::abi;

use core::ffi::CStr;

/// Octets in one ethernet address, as in the ethernet interface
/// definitions.
pub const ETH_ALEN: usize = 6;

/// Header common to all Open vSwitch netlink requests, following the
/// generic netlink header.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Header {
    pub dp_ifindex: abi::I32,
}

// Datapath family
pub const DATAPATH_FAMILY: &CStr = c"ovs_datapath";
pub const DATAPATH_MCGROUP: &CStr = c"ovs_datapath";
pub const DATAPATH_VERSION: abi::U8 = abi::num(2);
/// Feature set requested via `DP_ATTR_USER_FEATURES`.
pub const DP_VER_FEATURES: abi::U32 = abi::num(2);

// Datapath commands
pub const DP_CMD_UNSPEC: abi::U8 = abi::num(0);
pub const DP_CMD_NEW: abi::U8 = abi::num(1);
pub const DP_CMD_DEL: abi::U8 = abi::num(2);
pub const DP_CMD_GET: abi::U8 = abi::num(3);
pub const DP_CMD_SET: abi::U8 = abi::num(4);

// Datapath attributes
pub const DP_ATTR_UNSPEC: abi::U16 = abi::num(0);
pub const DP_ATTR_NAME: abi::U16 = abi::num(1);
pub const DP_ATTR_UPCALL_PID: abi::U16 = abi::num(2);
pub const DP_ATTR_STATS: abi::U16 = abi::num(3);
pub const DP_ATTR_MEGAFLOW_STATS: abi::U16 = abi::num(4);
pub const DP_ATTR_USER_FEATURES: abi::U16 = abi::num(5);
pub const DP_ATTR_MAX: abi::U16 = abi::num(5);

/// Statistics of a datapath, carried by `DP_ATTR_STATS`.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct DpStats {
    pub n_hit: abi::U64,
    pub n_missed: abi::U64,
    pub n_lost: abi::U64,
    pub n_flows: abi::U64,
}

/// Mega-flow statistics of a datapath, carried by
/// `DP_ATTR_MEGAFLOW_STATS`.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct DpMegaflowStats {
    pub n_mask_hit: abi::U64,
    pub n_masks: abi::U32,
    pub pad0: abi::U32,
    pub pad1: abi::U64,
    pub pad2: abi::U64,
}

/// Statistics of a vport, carried by `VPORT_ATTR_STATS`.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct VportStats {
    pub rx_packets: abi::U64,
    pub tx_packets: abi::U64,
    pub rx_bytes: abi::U64,
    pub tx_bytes: abi::U64,
    pub rx_errors: abi::U64,
    pub tx_errors: abi::U64,
    pub rx_dropped: abi::U64,
    pub tx_dropped: abi::U64,
}

// Datapath features
pub const DP_F_UNALIGNED: abi::U32 = abi::num(1 << 0);
pub const DP_F_VPORT_PIDS: abi::U32 = abi::num(1 << 1);

/// Number of the local vport of every datapath.
pub const OVSP_LOCAL: abi::U32 = abi::num(0);

// Packet family
pub const PACKET_FAMILY: &CStr = c"ovs_packet";
pub const PACKET_VERSION: abi::U8 = abi::num(0x1);

// Packet commands
pub const PACKET_CMD_UNSPEC: abi::U8 = abi::num(0);
pub const PACKET_CMD_MISS: abi::U8 = abi::num(1);
pub const PACKET_CMD_ACTION: abi::U8 = abi::num(2);
pub const PACKET_CMD_EXECUTE: abi::U8 = abi::num(3);

// Packet attributes
pub const PACKET_ATTR_UNSPEC: abi::U16 = abi::num(0);
pub const PACKET_ATTR_PACKET: abi::U16 = abi::num(1);
pub const PACKET_ATTR_KEY: abi::U16 = abi::num(2);
pub const PACKET_ATTR_ACTIONS: abi::U16 = abi::num(3);
pub const PACKET_ATTR_USERDATA: abi::U16 = abi::num(4);
pub const PACKET_ATTR_MAX: abi::U16 = abi::num(4);

// Vport family
pub const VPORT_FAMILY: &CStr = c"ovs_vport";
pub const VPORT_MCGROUP: &CStr = c"ovs_vport";
pub const VPORT_VERSION: abi::U8 = abi::num(0x1);

// Vport commands
pub const VPORT_CMD_UNSPEC: abi::U8 = abi::num(0);
pub const VPORT_CMD_NEW: abi::U8 = abi::num(1);
pub const VPORT_CMD_DEL: abi::U8 = abi::num(2);
pub const VPORT_CMD_GET: abi::U8 = abi::num(3);
pub const VPORT_CMD_SET: abi::U8 = abi::num(4);

// Vport types, carried by `VPORT_ATTR_TYPE`
pub const VPORT_TYPE_UNSPEC: abi::U32 = abi::num(0);
pub const VPORT_TYPE_NETDEV: abi::U32 = abi::num(1);
pub const VPORT_TYPE_INTERNAL: abi::U32 = abi::num(2);
pub const VPORT_TYPE_GRE: abi::U32 = abi::num(3);
pub const VPORT_TYPE_VXLAN: abi::U32 = abi::num(4);
pub const VPORT_TYPE_GENEVE: abi::U32 = abi::num(5);
pub const VPORT_TYPE_MAX: abi::U32 = abi::num(5);

// Vport attributes
pub const VPORT_ATTR_UNSPEC: abi::U16 = abi::num(0);
pub const VPORT_ATTR_PORT_NO: abi::U16 = abi::num(1);
pub const VPORT_ATTR_TYPE: abi::U16 = abi::num(2);
pub const VPORT_ATTR_NAME: abi::U16 = abi::num(3);
pub const VPORT_ATTR_OPTIONS: abi::U16 = abi::num(4);
pub const VPORT_ATTR_UPCALL_PID: abi::U16 = abi::num(5);
pub const VPORT_ATTR_STATS: abi::U16 = abi::num(6);
pub const VPORT_ATTR_MAX: abi::U16 = abi::num(6);

// Tunnel vport options, nested in `VPORT_ATTR_OPTIONS`
pub const TUNNEL_ATTR_UNSPEC: abi::U16 = abi::num(0);
pub const TUNNEL_ATTR_DST_PORT: abi::U16 = abi::num(1);
pub const TUNNEL_ATTR_MAX: abi::U16 = abi::num(1);

// Flow family
pub const FLOW_FAMILY: &CStr = c"ovs_flow";
pub const FLOW_MCGROUP: &CStr = c"ovs_flow";
pub const FLOW_VERSION: abi::U8 = abi::num(0x1);

// Flow commands
pub const FLOW_CMD_UNSPEC: abi::U8 = abi::num(0);
pub const FLOW_CMD_NEW: abi::U8 = abi::num(1);
pub const FLOW_CMD_DEL: abi::U8 = abi::num(2);
pub const FLOW_CMD_GET: abi::U8 = abi::num(3);
pub const FLOW_CMD_SET: abi::U8 = abi::num(4);

/// Statistics of a flow, carried by `FLOW_ATTR_STATS`.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct FlowStats {
    pub n_packets: abi::U64,
    pub n_bytes: abi::U64,
}

// Flow key attributes, nested in `FLOW_ATTR_KEY`
pub const KEY_ATTR_UNSPEC: abi::U16 = abi::num(0);
pub const KEY_ATTR_ENCAP: abi::U16 = abi::num(1);
pub const KEY_ATTR_PRIORITY: abi::U16 = abi::num(2);
pub const KEY_ATTR_IN_PORT: abi::U16 = abi::num(3);
pub const KEY_ATTR_ETHERNET: abi::U16 = abi::num(4);
pub const KEY_ATTR_VLAN: abi::U16 = abi::num(5);
pub const KEY_ATTR_ETHERTYPE: abi::U16 = abi::num(6);
pub const KEY_ATTR_IPV4: abi::U16 = abi::num(7);
pub const KEY_ATTR_IPV6: abi::U16 = abi::num(8);
pub const KEY_ATTR_TCP: abi::U16 = abi::num(9);
pub const KEY_ATTR_UDP: abi::U16 = abi::num(10);
pub const KEY_ATTR_ICMP: abi::U16 = abi::num(11);
pub const KEY_ATTR_ICMPV6: abi::U16 = abi::num(12);
pub const KEY_ATTR_ARP: abi::U16 = abi::num(13);
pub const KEY_ATTR_ND: abi::U16 = abi::num(14);
pub const KEY_ATTR_SKB_MARK: abi::U16 = abi::num(15);
pub const KEY_ATTR_TUNNEL: abi::U16 = abi::num(16);
pub const KEY_ATTR_SCTP: abi::U16 = abi::num(17);
pub const KEY_ATTR_TCP_FLAGS: abi::U16 = abi::num(18);
pub const KEY_ATTR_DP_HASH: abi::U16 = abi::num(19);
pub const KEY_ATTR_RECIRC_ID: abi::U16 = abi::num(20);
pub const KEY_ATTR_MAX: abi::U16 = abi::num(20);

// Tunnel key attributes, nested in `KEY_ATTR_TUNNEL`
pub const TUNNEL_KEY_ATTR_ID: abi::U16 = abi::num(0);
pub const TUNNEL_KEY_ATTR_IPV4_SRC: abi::U16 = abi::num(1);
pub const TUNNEL_KEY_ATTR_IPV4_DST: abi::U16 = abi::num(2);
pub const TUNNEL_KEY_ATTR_TOS: abi::U16 = abi::num(3);
pub const TUNNEL_KEY_ATTR_TTL: abi::U16 = abi::num(4);
pub const TUNNEL_KEY_ATTR_DONT_FRAGMENT: abi::U16 = abi::num(5);
pub const TUNNEL_KEY_ATTR_CSUM: abi::U16 = abi::num(6);
pub const TUNNEL_KEY_ATTR_OAM: abi::U16 = abi::num(7);
pub const TUNNEL_KEY_ATTR_GENEVE_OPTS: abi::U16 = abi::num(8);
pub const TUNNEL_KEY_ATTR_MAX: abi::U16 = abi::num(8);

// IP fragment handling of a flow key, stored in the single-byte
// `ipv4_frag`/`ipv6_frag` fields
pub const FRAG_TYPE_NONE: abi::U8 = abi::num(0);
pub const FRAG_TYPE_FIRST: abi::U8 = abi::num(1);
pub const FRAG_TYPE_LATER: abi::U8 = abi::num(2);
pub const FRAG_TYPE_MAX: abi::U8 = abi::num(2);

/// Ethernet addresses of a flow key, carried by `KEY_ATTR_ETHERNET`.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct KeyEthernet {
    pub eth_src: [abi::U8; ETH_ALEN],
    pub eth_dst: [abi::U8; ETH_ALEN],
}

/// IPv4 header fields of a flow key, carried by `KEY_ATTR_IPV4`.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct KeyIpv4 {
    pub ipv4_src: abi::B32,
    pub ipv4_dst: abi::B32,
    pub ipv4_proto: abi::U8,
    pub ipv4_tos: abi::U8,
    pub ipv4_ttl: abi::U8,
    pub ipv4_frag: abi::U8,
}

/// IPv6 header fields of a flow key, carried by `KEY_ATTR_IPV6`.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct KeyIpv6 {
    pub ipv6_src: [abi::B32; 4],
    pub ipv6_dst: [abi::B32; 4],
    pub ipv6_label: abi::B32,
    pub ipv6_proto: abi::U8,
    pub ipv6_tclass: abi::U8,
    pub ipv6_hlimit: abi::U8,
    pub ipv6_frag: abi::U8,
}

/// TCP ports of a flow key, carried by `KEY_ATTR_TCP`.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct KeyTcp {
    pub tcp_src: abi::B16,
    pub tcp_dst: abi::B16,
}

/// UDP ports of a flow key, carried by `KEY_ATTR_UDP`.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct KeyUdp {
    pub udp_src: abi::B16,
    pub udp_dst: abi::B16,
}

/// SCTP ports of a flow key, carried by `KEY_ATTR_SCTP`.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct KeySctp {
    pub sctp_src: abi::B16,
    pub sctp_dst: abi::B16,
}

/// ICMP type and code of a flow key, carried by `KEY_ATTR_ICMP`.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct KeyIcmp {
    pub icmp_type: abi::U8,
    pub icmp_code: abi::U8,
}

/// ICMPv6 type and code of a flow key, carried by `KEY_ATTR_ICMPV6`.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct KeyIcmpv6 {
    pub icmpv6_type: abi::U8,
    pub icmpv6_code: abi::U8,
}

/// ARP fields of a flow key, carried by `KEY_ATTR_ARP`.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct KeyArp {
    pub arp_sip: abi::B32,
    pub arp_tip: abi::B32,
    pub arp_op: abi::B16,
    pub arp_sha: [abi::U8; ETH_ALEN],
    pub arp_tha: [abi::U8; ETH_ALEN],
}

/// Neighbor-discovery fields of a flow key, carried by `KEY_ATTR_ND`.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct KeyNd {
    pub nd_target: [abi::U32; 4],
    pub nd_sll: [abi::U8; ETH_ALEN],
    pub nd_tll: [abi::U8; ETH_ALEN],
}

// Flow attributes
pub const FLOW_ATTR_UNSPEC: abi::U16 = abi::num(0);
pub const FLOW_ATTR_KEY: abi::U16 = abi::num(1);
pub const FLOW_ATTR_ACTIONS: abi::U16 = abi::num(2);
pub const FLOW_ATTR_STATS: abi::U16 = abi::num(3);
pub const FLOW_ATTR_TCP_FLAGS: abi::U16 = abi::num(4);
pub const FLOW_ATTR_USED: abi::U16 = abi::num(5);
pub const FLOW_ATTR_CLEAR: abi::U16 = abi::num(6);
pub const FLOW_ATTR_MASK: abi::U16 = abi::num(7);
pub const FLOW_ATTR_MAX: abi::U16 = abi::num(7);

// Sampling action attributes, nested in `ACTION_ATTR_SAMPLE`
pub const SAMPLE_ATTR_UNSPEC: abi::U16 = abi::num(0);
pub const SAMPLE_ATTR_PROBABILITY: abi::U16 = abi::num(1);
pub const SAMPLE_ATTR_ACTIONS: abi::U16 = abi::num(2);
pub const SAMPLE_ATTR_MAX: abi::U16 = abi::num(2);

// Upcall action attributes, nested in `ACTION_ATTR_USERSPACE`
pub const USERSPACE_ATTR_UNSPEC: abi::U16 = abi::num(0);
pub const USERSPACE_ATTR_PID: abi::U16 = abi::num(1);
pub const USERSPACE_ATTR_USERDATA: abi::U16 = abi::num(2);
pub const USERSPACE_ATTR_MAX: abi::U16 = abi::num(2);

/// VLAN tag pushed by `ACTION_ATTR_PUSH_VLAN`.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct ActionPushVlan {
    pub vlan_tpid: abi::B16,
    pub vlan_tci: abi::B16,
}

// Hash algorithms of [`ActionHash`]
pub const HASH_ALG_L4: abi::U32 = abi::num(0);

/// Flow hash computation action, carried by `ACTION_ATTR_HASH`.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct ActionHash {
    pub hash_alg: abi::U32,
    pub hash_basis: abi::U32,
}

// Flow actions, nested in `FLOW_ATTR_ACTIONS`
pub const ACTION_ATTR_UNSPEC: abi::U16 = abi::num(0);
pub const ACTION_ATTR_OUTPUT: abi::U16 = abi::num(1);
pub const ACTION_ATTR_USERSPACE: abi::U16 = abi::num(2);
pub const ACTION_ATTR_SET: abi::U16 = abi::num(3);
pub const ACTION_ATTR_PUSH_VLAN: abi::U16 = abi::num(4);
pub const ACTION_ATTR_POP_VLAN: abi::U16 = abi::num(5);
pub const ACTION_ATTR_SAMPLE: abi::U16 = abi::num(6);
pub const ACTION_ATTR_RECIRC: abi::U16 = abi::num(7);
pub const ACTION_ATTR_HASH: abi::U16 = abi::num(8);
pub const ACTION_ATTR_MAX: abi::U16 = abi::num(8);
