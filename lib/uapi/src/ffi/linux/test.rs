//! # Tests for the Linux FFI Definitions
//!
//! This module contains tests for all exported FFI definitions of the
//! `ffi::linux` module.

use super::*;

// If `libc` is not enabled, just alias it from `native` so the test
// can just use `libc` unconditionally.
#[cfg(not(feature = "libc"))]
use native as libc;

// Compare two `const` definitions for equality. This will compare their
// type layout and memory content for equality.
fn eq_def_const<A, B>(a: &A, b: &B) -> bool {
    core::mem::size_of::<A>() == core::mem::size_of::<B>()
    && core::mem::align_of::<A>() == core::mem::align_of::<B>()
    && fabi::mem::eq(a, b)
}

// A 3-way variant of `eq_def_const()`.
fn eq3_def_const<A, B, C>(a: &A, b: &B, c: &C) -> bool {
    eq_def_const(a, b) && eq_def_const(a, c)
}

// Verify that all supported platforms are available, by simply checking
// that they expose `abi::U16`.
#[test]
fn platform_availability() {
    assert_eq!(core::mem::size_of::<x86::abi::U16>(), 2);
    assert_eq!(core::mem::size_of::<x86_64::abi::U16>(), 2);
    assert_eq!(core::mem::size_of::<target::abi::U16>(), 2);
    assert_eq!(core::mem::size_of::<native::abi::U16>(), 2);
    assert_eq!(core::mem::size_of::<libc::abi::U16>(), 2);
}

// Compare target APIs with native and libc APIs, and verify they match.
#[test]
fn comparison() {
    assert!(eq3_def_const(&target::errno::EPERM, &native::errno::EPERM, &libc::errno::EPERM));
    assert!(eq3_def_const(&target::errno::EINTR, &native::errno::EINTR, &libc::errno::EINTR));
    assert!(eq3_def_const(&target::errno::EIO, &native::errno::EIO, &libc::errno::EIO));
    assert!(eq3_def_const(&target::errno::EINVAL, &native::errno::EINVAL, &libc::errno::EINVAL));
    assert!(eq3_def_const(&target::errno::ERANGE, &native::errno::ERANGE, &libc::errno::ERANGE));
    assert!(eq3_def_const(&target::errno::EHWPOISON, &native::errno::EHWPOISON, &libc::errno::EHWPOISON));

    assert!(eq3_def_const(&target::prctl::SET_NAME, &native::prctl::SET_NAME, &libc::prctl::SET_NAME));
    assert!(eq3_def_const(&target::prctl::GET_NAME, &native::prctl::GET_NAME, &libc::prctl::GET_NAME));
}

// Verify the error-code name table against the constants.
#[test]
fn errno_names() {
    assert_eq!(native::errno::name(native::errno::EPERM), Some("EPERM"));
    assert_eq!(native::errno::name(native::errno::ERANGE), Some("ERANGE"));
    assert_eq!(native::errno::name(native::errno::EHWPOISON), Some("EHWPOISON"));

    // Aliased codes yield the canonical name.
    assert_eq!(native::errno::name(native::errno::EWOULDBLOCK), Some("EAGAIN"));

    // Unassigned and out-of-range codes have no name.
    assert_eq!(native::errno::name(41), None);
    assert_eq!(native::errno::name(0), None);
    assert_eq!(native::errno::name(4096), None);
}

// Verify the task-naming definitions.
#[test]
fn prctl_values() {
    assert_eq!(native::prctl::SET_NAME, 15);
    assert_eq!(native::prctl::GET_NAME, 16);
    assert_eq!(native::prctl::TASK_COMM_LEN, 16);
    assert_eq!(x86::prctl::TASK_COMM_LEN, x86_64::prctl::TASK_COMM_LEN);
}

// Verify the I/O priority packing helpers against their definition.
#[test]
fn ioprio_packing() {
    assert!(eq3_def_const(&target::ioprio::CLASS_BE, &native::ioprio::CLASS_BE, &x86::ioprio::CLASS_BE));

    let v = native::ioprio::prio_value(native::ioprio::CLASS_BE, native::ioprio::NORM);
    assert_eq!(v, (2 << 13) | 4);
    assert_eq!(native::ioprio::prio_class(v), native::ioprio::CLASS_BE);
    assert_eq!(native::ioprio::prio_data(v), native::ioprio::NORM);
    assert!(native::ioprio::prio_valid(v));
    assert!(!native::ioprio::prio_valid(native::ioprio::NORM));
}

// Verify the ioctl request encoding, including the decode helpers.
#[test]
fn ioctl_encoding() {
    let blit: u32 = native::msmfb::BLIT;

    assert_eq!(native::ioctl::dir(blit), native::ioctl::WRITE);
    assert_eq!(native::ioctl::ty(blit), native::msmfb::IOCTL_MAGIC);
    assert_eq!(native::ioctl::nr(blit), 2);
    assert_eq!(native::ioctl::size(blit), 4);

    assert_eq!(native::ioctl::dir(native::msmfb::WRITEBACK_INIT), native::ioctl::NONE);
    assert_eq!(native::ioctl::size(native::msmfb::WRITEBACK_INIT), 0);
}

// Verify the display-processor request codes against their known
// values. Requests whose argument carries pointers differ between the
// 32-bit and the 64-bit ABI; the others must match.
#[test]
fn msmfb_requests() {
    assert_eq!(fabi::ffi::to_native::<_, u32>(x86::msmfb::BLIT), 0x40046d02);
    assert_eq!(fabi::ffi::to_native::<_, u32>(x86_64::msmfb::BLIT), 0x40046d02);

    assert_eq!(fabi::ffi::to_native::<_, u32>(x86::msmfb::WRITEBACK_INIT), 0x00006d96);
    assert_eq!(fabi::ffi::to_native::<_, u32>(x86_64::msmfb::WRITEBACK_INIT), 0x00006d96);

    assert_eq!(fabi::ffi::to_native::<_, u32>(x86::msmfb::DISPLAY_COMMIT), 0x41b06da4);
    assert_eq!(fabi::ffi::to_native::<_, u32>(x86_64::msmfb::DISPLAY_COMMIT), 0x41b06da4);

    assert_eq!(fabi::ffi::to_native::<_, u32>(x86::msmfb::CURSOR), 0x40486d82);
    assert_eq!(fabi::ffi::to_native::<_, u32>(x86_64::msmfb::CURSOR), 0x40686d82);

    assert_eq!(fabi::ffi::to_native::<_, u32>(x86::msmfb::OVERLAY_SET), 0xc1506d87);
    assert_eq!(fabi::ffi::to_native::<_, u32>(x86_64::msmfb::OVERLAY_SET), 0xc1806d87);

    assert!(eq_def_const(&x86::msmfb::OVERLAY_QUEUE, &x86::msmfb::OVERLAY_PLAY));
}

// Verify the layout of the display-processor structures on both
// platform ABIs.
#[test]
fn mdp_layouts() {
    assert_eq!(size_of::<x86::mdp::Rect>(), 16);
    assert_eq!(size_of::<x86_64::mdp::Rect>(), 16);
    assert_eq!(size_of::<x86::mdp::Img>(), 24);
    assert_eq!(size_of::<x86_64::mdp::Img>(), 24);
    assert_eq!(size_of::<x86::mdp::BlitReq>(), 96);
    assert_eq!(size_of::<x86_64::mdp::BlitReq>(), 96);
    assert_eq!(size_of::<x86::mdp::Ccs>(), 28);
    assert_eq!(size_of::<x86_64::mdp::Ccs>(), 28);

    // Pointer-carrying structures differ per ABI.
    assert_eq!(size_of::<x86::mdp::HistogramData>(), 24);
    assert_eq!(size_of::<x86_64::mdp::HistogramData>(), 40);
    assert_eq!(size_of::<x86::mdp::Overlay>(), 336);
    assert_eq!(size_of::<x86_64::mdp::Overlay>(), 384);
    assert_eq!(align_of::<x86::mdp::Overlay>(), 4);
    assert_eq!(align_of::<x86_64::mdp::Overlay>(), 8);

    // Pointer-free structures must not.
    assert_eq!(size_of::<x86::mdp::DisplayCommit>(), 432);
    assert_eq!(size_of::<x86_64::mdp::DisplayCommit>(), 432);

    assert_eq!(size_of::<x86::msmfb::Data>(), 24);
    assert_eq!(size_of::<x86_64::msmfb::Data>(), 24);
    assert_eq!(size_of::<x86::msmfb::OverlayData>(), 104);
    assert_eq!(size_of::<x86_64::msmfb::OverlayData>(), 104);
    assert_eq!(size_of::<x86::msmfb::Metadata>(), 148);
    assert_eq!(size_of::<x86_64::msmfb::Metadata>(), 148);

    assert_eq!(size_of::<x86::fb::VarScreeninfo>(), 160);
    assert_eq!(size_of::<x86_64::fb::VarScreeninfo>(), 160);
    assert_eq!(size_of::<x86::fb::Cmap>(), 24);
    assert_eq!(size_of::<x86_64::fb::Cmap>(), 40);
    assert_eq!(size_of::<x86::fb::Cursor>(), 72);
    assert_eq!(size_of::<x86_64::fb::Cursor>(), 104);
}

// Verify the layout of the Open vSwitch structures. None of them
// carries pointers, so the two platform ABIs must agree.
#[test]
fn ovs_layouts() {
    assert_eq!(size_of::<x86::ovs::Header>(), 4);
    assert_eq!(size_of::<x86::ovs::DpStats>(), 32);
    assert_eq!(size_of::<x86::ovs::DpMegaflowStats>(), 32);
    assert_eq!(size_of::<x86::ovs::VportStats>(), 64);
    assert_eq!(size_of::<x86::ovs::FlowStats>(), 16);
    assert_eq!(size_of::<x86::ovs::KeyEthernet>(), 12);
    assert_eq!(size_of::<x86::ovs::KeyIpv4>(), 12);
    assert_eq!(size_of::<x86::ovs::KeyIpv6>(), 40);
    assert_eq!(size_of::<x86::ovs::KeyTcp>(), 4);
    assert_eq!(size_of::<x86::ovs::KeyArp>(), 24);
    assert_eq!(size_of::<x86::ovs::KeyNd>(), 28);
    assert_eq!(size_of::<x86::ovs::ActionPushVlan>(), 4);
    assert_eq!(size_of::<x86::ovs::ActionHash>(), 8);

    assert_eq!(size_of::<x86_64::ovs::DpMegaflowStats>(), 32);
    assert_eq!(size_of::<x86_64::ovs::KeyIpv6>(), 40);
    assert_eq!(size_of::<x86_64::ovs::KeyArp>(), 24);
}

// Verify the Open vSwitch constant vocabulary.
#[test]
fn ovs_values() {
    assert_eq!(native::ovs::DP_CMD_SET, 4);
    assert_eq!(native::ovs::KEY_ATTR_RECIRC_ID, 20);
    assert_eq!(native::ovs::KEY_ATTR_MAX, 20);
    assert_eq!(native::ovs::ACTION_ATTR_MAX, 8);
    assert_eq!(native::ovs::VPORT_ATTR_MAX, 6);

    assert!(eq3_def_const(&target::ovs::DP_CMD_NEW, &native::ovs::DP_CMD_NEW, &x86::ovs::DP_CMD_NEW));
    assert!(eq_def_const(&x86::ovs::KEY_ATTR_TUNNEL, &x86_64::ovs::KEY_ATTR_TUNNEL));

    assert_eq!(native::ovs::DATAPATH_FAMILY.to_bytes(), b"ovs_datapath");
    assert_eq!(native::ovs::VPORT_FAMILY.to_bytes(), b"ovs_vport");
    assert_eq!(native::ovs::FLOW_FAMILY.to_bytes(), b"ovs_flow");
    assert_eq!(native::ovs::PACKET_FAMILY.to_bytes(), b"ovs_packet");
}

// Verify the big-endian flow-key fields store network byte-order on
// every ABI.
#[test]
fn ovs_endianness() {
    let native_key = native::ovs::KeyTcp {
        tcp_src: native::abi::num(443),
        tcp_dst: native::abi::num(8080),
    };
    let x86_key = x86::ovs::KeyTcp {
        tcp_src: x86::abi::num(443),
        tcp_dst: x86::abi::num(8080),
    };

    assert_eq!(fabi::mem::as_bytes(&native_key), &[0x01, 0xbb, 0x1f, 0x90]);
    assert_eq!(fabi::mem::as_bytes(&x86_key), &[0x01, 0xbb, 0x1f, 0x90]);
    assert!(eq_def_const(&native_key, &x86_key));
}
