//! # Display-Processor Ioctl Interface
//!
//! The MSM display processor is driven through ioctls on its
//! framebuffer device. This module carries the request codes and the
//! request structures owned by the framebuffer driver itself; the
//! shared display-processor vocabulary lives in [`super::mdp`], and the
//! generic framebuffer structures in [`super::fb`].
//!
//! The `msmfb_`/`MSMFB_` prefix is stripped. Note that the request
//! codes encode the size of their argument structure, so
//! pointer-carrying requests differ between the 32-bit and 64-bit
//! platform modules.

use super::abi;
use super::fb;
use super::ioctl;
use super::mdp;

/// Type character of all display-processor requests.
pub const IOCTL_MAGIC: u32 = b'm' as u32;

pub const GRP_DISP: abi::U32 = ioctl::iow::<abi::U32>(IOCTL_MAGIC, 1);
pub const BLIT: abi::U32 = ioctl::iow::<abi::U32>(IOCTL_MAGIC, 2);
pub const SUSPEND_SW_REFRESHER: abi::U32 = ioctl::iow::<abi::U32>(IOCTL_MAGIC, 128);
pub const RESUME_SW_REFRESHER: abi::U32 = ioctl::iow::<abi::U32>(IOCTL_MAGIC, 129);
pub const CURSOR: abi::U32 = ioctl::iow::<fb::Cursor>(IOCTL_MAGIC, 130);
pub const SET_LUT: abi::U32 = ioctl::iow::<fb::Cmap>(IOCTL_MAGIC, 131);
pub const HISTOGRAM: abi::U32 = ioctl::iowr::<mdp::HistogramData>(IOCTL_MAGIC, 132);
pub const GET_CCS_MATRIX: abi::U32 = ioctl::iowr::<mdp::Ccs>(IOCTL_MAGIC, 133);
pub const SET_CCS_MATRIX: abi::U32 = ioctl::iow::<mdp::Ccs>(IOCTL_MAGIC, 134);
pub const OVERLAY_SET: abi::U32 = ioctl::iowr::<mdp::Overlay>(IOCTL_MAGIC, 135);
pub const OVERLAY_UNSET: abi::U32 = ioctl::iow::<abi::U32>(IOCTL_MAGIC, 136);
pub const OVERLAY_PLAY: abi::U32 = ioctl::iow::<OverlayData>(IOCTL_MAGIC, 137);
pub const OVERLAY_QUEUE: abi::U32 = OVERLAY_PLAY;
pub const GET_PAGE_PROTECTION: abi::U32 = ioctl::ior::<mdp::PageProtection>(IOCTL_MAGIC, 138);
pub const SET_PAGE_PROTECTION: abi::U32 = ioctl::iow::<mdp::PageProtection>(IOCTL_MAGIC, 139);
pub const OVERLAY_GET: abi::U32 = ioctl::ior::<mdp::Overlay>(IOCTL_MAGIC, 140);
pub const OVERLAY_PLAY_ENABLE: abi::U32 = ioctl::iow::<abi::U32>(IOCTL_MAGIC, 141);
pub const OVERLAY_BLT: abi::U32 = ioctl::iowr::<OverlayBlt>(IOCTL_MAGIC, 142);
pub const OVERLAY_BLT_OFFSET: abi::U32 = ioctl::iow::<abi::U32>(IOCTL_MAGIC, 143);
pub const HISTOGRAM_START: abi::U32 = ioctl::ior::<mdp::HistogramStartReq>(IOCTL_MAGIC, 144);
pub const HISTOGRAM_STOP: abi::U32 = ioctl::ior::<abi::U32>(IOCTL_MAGIC, 145);
pub const NOTIFY_UPDATE: abi::U32 = ioctl::iowr::<abi::U32>(IOCTL_MAGIC, 146);
pub const OVERLAY_3D: abi::U32 = ioctl::iowr::<Overlay3d>(IOCTL_MAGIC, 147);
pub const MIXER_INFO: abi::U32 = ioctl::iowr::<MixerInfoReq>(IOCTL_MAGIC, 148);
pub const OVERLAY_PLAY_WAIT: abi::U32 = ioctl::iowr::<OverlayData>(IOCTL_MAGIC, 149);
pub const WRITEBACK_INIT: abi::U32 = ioctl::io(IOCTL_MAGIC, 150);
pub const WRITEBACK_START: abi::U32 = ioctl::io(IOCTL_MAGIC, 151);
pub const WRITEBACK_STOP: abi::U32 = ioctl::io(IOCTL_MAGIC, 152);
pub const WRITEBACK_QUEUE_BUFFER: abi::U32 = ioctl::iow::<Data>(IOCTL_MAGIC, 153);
pub const WRITEBACK_DEQUEUE_BUFFER: abi::U32 = ioctl::iow::<Data>(IOCTL_MAGIC, 154);
pub const WRITEBACK_TERMINATE: abi::U32 = ioctl::io(IOCTL_MAGIC, 155);
pub const MDP_PP: abi::U32 = ioctl::iowr::<MdpPp>(IOCTL_MAGIC, 156);
pub const OVERLAY_VSYNC_CTRL: abi::U32 = ioctl::iow::<abi::U32>(IOCTL_MAGIC, 160);
pub const VSYNC_CTRL: abi::U32 = ioctl::iow::<abi::U32>(IOCTL_MAGIC, 161);
pub const BUFFER_SYNC: abi::U32 = ioctl::iow::<mdp::BufSync>(IOCTL_MAGIC, 162);
pub const OVERLAY_COMMIT: abi::U32 = ioctl::io(IOCTL_MAGIC, 163);
pub const DISPLAY_COMMIT: abi::U32 = ioctl::iow::<mdp::DisplayCommit>(IOCTL_MAGIC, 164);
pub const METADATA_SET: abi::U32 = ioctl::iow::<Metadata>(IOCTL_MAGIC, 165);
pub const METADATA_GET: abi::U32 = ioctl::iow::<Metadata>(IOCTL_MAGIC, 166);
pub const WRITEBACK_SET_MIRRORING_HINT: abi::U32 = ioctl::iow::<abi::U32>(IOCTL_MAGIC, 167);
pub const ASYNC_BLIT: abi::U32 = ioctl::iow::<abi::U32>(IOCTL_MAGIC, 168);
pub const REG_READ: abi::U32 = ioctl::iowr::<RegAccess>(IOCTL_MAGIC, 64);
pub const REG_WRITE: abi::U32 = ioctl::iow::<RegAccess>(IOCTL_MAGIC, 65);

pub const FB_TYPE_3D_PANEL: abi::U32 = abi::num(0x10101010);
pub const DRIVER_VERSION: abi::U32 = abi::num(0xF9E8D701);

// Display update notification phases, exchanged via `NOTIFY_UPDATE`.
pub const NOTIFY_UPDATE_START: abi::U32 = abi::num(0);
pub const NOTIFY_UPDATE_STOP: abi::U32 = abi::num(1);
pub const NOTIFY_UPDATE_POWER_OFF: abi::U32 = abi::num(2);

pub const NOTIFY_TYPE_NO_UPDATE: abi::U32 = abi::num(0);
pub const NOTIFY_TYPE_SUSPEND: abi::U32 = abi::num(1);
pub const NOTIFY_TYPE_UPDATE: abi::U32 = abi::num(2);

/// Version of [`Data`] implemented here.
pub const DATA_VERSION: abi::U32 = abi::num(2);

/// A buffer handed to the driver, identified by the file descriptor of
/// its backing memory.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Data {
    pub offset: abi::U32,
    pub memory_id: abi::I32,
    pub id: abi::I32,
    pub flags: abi::U32,
    pub priv_: abi::U32,
    pub iova: abi::U32,
}

/// Requests allocation of a new overlay pipe in the `id` field.
pub const NEW_REQUEST: abi::I32 = abi::num(-1);

/// Buffers of one overlay frame, by color plane.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct OverlayData {
    pub id: abi::U32,
    pub data: Data,
    pub version_key: abi::U32,
    pub plane1_data: Data,
    pub plane2_data: Data,
    pub dst_data: Data,
}

/// Size and format of an image, without backing memory.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Img {
    pub width: abi::U32,
    pub height: abi::U32,
    pub format: abi::U32,
}

/// Blocks `WRITEBACK_DEQUEUE_BUFFER` until a buffer is available.
pub const WRITEBACK_DEQUEUE_BLOCKING: abi::U32 = abi::num(0x1);

/// A writeback buffer and the image stored in it.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct WritebackData {
    pub buf_info: Data,
    pub img: Img,
}

/// Stereoscopic mode of the display.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Overlay3d {
    pub is_3d: abi::U32,
    pub width: abi::U32,
    pub height: abi::U32,
}

/// Blit engine scratch buffer configuration.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct OverlayBlt {
    pub enable: abi::U32,
    pub offset: abi::U32,
    pub width: abi::U32,
    pub height: abi::U32,
    pub bpp: abi::U32,
}

/// The configuration block carried by [`MdpPp`], selected via `op`.
#[derive(Clone, Copy)]
#[repr(C)]
pub union MdpPpData {
    pub pcc_cfg_data: mdp::PccCfgData,
    pub csc_cfg_data: mdp::CscCfgData,
    pub lut_cfg_data: mdp::LutCfgData,
    pub qseed_cfg_data: mdp::QseedCfgData,
    pub bl_scale_data: mdp::BlScaleData,
    pub pa_cfg_data: mdp::PaCfgData,
    pub dither_cfg_data: mdp::DitherCfgData,
    pub gamut_cfg_data: mdp::GamutCfgData,
    pub calib_cfg: mdp::CalibConfigData,
    pub ad_init_cfg: mdp::MdssAdInitCfg,
    pub mdss_calib_cfg: mdp::MdssCalibCfg,
    pub ad_input: mdp::MdssAdInput,
    pub calib_buffer: mdp::CalibConfigBuffer,
    pub calib_dcm: mdp::CalibDcmState,
}

/// A post-processing request, selected via `op` (see the `OP_*`
/// constants in [`super::mdp`]).
#[derive(Clone, Copy)]
#[repr(C)]
pub struct MdpPp {
    pub op: abi::U32,
    pub data: MdpPpData,
}

pub const FB_METADATA_VIDEO_INFO_CODE_SUPPORT: abi::U32 = abi::num(1);

// Metadata operations, given in the `op` field of [`Metadata`].
pub const METADATA_OP_NONE: abi::U32 = abi::num(0);
pub const METADATA_OP_BASE_BLEND: abi::U32 = abi::num(1);
pub const METADATA_OP_FRAME_RATE: abi::U32 = abi::num(2);
pub const METADATA_OP_VIC: abi::U32 = abi::num(3);
pub const METADATA_OP_WB_FORMAT: abi::U32 = abi::num(4);
pub const METADATA_OP_GET_CAPS: abi::U32 = abi::num(5);
pub const METADATA_OP_CRC: abi::U32 = abi::num(6);
pub const METADATA_OP_MAX: abi::U32 = abi::num(7);

/// The payload carried by [`Metadata`], selected via `op`.
#[derive(Clone, Copy)]
#[repr(C)]
pub union MetadataPayload {
    pub misr_request: mdp::Misr,
    pub blend_cfg: mdp::BlendCfg,
    pub mixer_cfg: mdp::MixerCfg,
    pub panel_frame_rate: abi::U32,
    pub video_info_code: abi::U32,
    pub caps: mdp::MdssHwCaps,
}

/// Driver metadata exchange, selected via `op`.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct Metadata {
    pub op: abi::U32,
    pub flags: abi::U32,
    pub data: MetadataPayload,
}

/// Queries the pipes assigned to a mixer.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct MixerInfoReq {
    pub mixer_num: abi::I32,
    pub cnt: abi::I32,
    pub info: [mdp::MixerInfo; mdp::MAX_PIPE_PER_MIXER],
}

/// Raw register access for panel debugging.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct RegAccess {
    pub address: abi::U8,
    pub use_hs_mode: abi::U8,
    pub buffer_size: abi::Usize,
    pub buffer: Option<abi::Ptr<core::ffi::c_void>>,
}
