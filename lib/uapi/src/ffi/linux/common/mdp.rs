//! # Display-Processor Data Structures
//!
//! The MSM mobile display processor exposes its blit, overlay, and
//! post-processing engines through ioctls on the framebuffer device
//! (see [`super::msmfb`] for the request codes). This module carries
//! the argument structures and the constant vocabulary shared by those
//! requests: source/destination image descriptors, rotation and blend
//! flags, pixel formats, and the post-processing configuration blocks.
//!
//! All enumerations are transposed as `u32` constants, matching the
//! width of the structure fields that carry them. The `mdp_`/`MDP_`
//! prefix is stripped; the `MDSS_` vocabulary of the later hardware
//! generation keeps its prefix.

use super::abi;
use super::fb;
use super::msmfb;

// Rotation and blit flags, given in the `flags` field of a request.
pub const ROT_NOP: abi::U32 = abi::num(0);
pub const FLIP_LR: abi::U32 = abi::num(0x1);
pub const FLIP_UD: abi::U32 = abi::num(0x2);
pub const ROT_90: abi::U32 = abi::num(0x4);
pub const ROT_180: abi::U32 = abi::num(0x2 | 0x1); // FLIP_UD | FLIP_LR
pub const ROT_270: abi::U32 = abi::num(0x4 | 0x2 | 0x1); // ROT_90 | FLIP_UD | FLIP_LR
pub const DITHER: abi::U32 = abi::num(0x8);
pub const BLUR: abi::U32 = abi::num(0x10);
pub const BLEND_FG_PREMULT: abi::U32 = abi::num(0x20000);
pub const IS_FG: abi::U32 = abi::num(0x40000);
pub const DEINTERLACE: abi::U32 = abi::num(0x80000000);
pub const SHARPENING: abi::U32 = abi::num(0x40000000);
pub const NO_DMA_BARRIER_START: abi::U32 = abi::num(0x20000000);
pub const NO_DMA_BARRIER_END: abi::U32 = abi::num(0x10000000);
pub const NO_BLIT: abi::U32 = abi::num(0x08000000);
pub const BLIT_WITH_DMA_BARRIERS: abi::U32 = abi::num(0x000);
pub const BLIT_WITH_NO_DMA_BARRIERS: abi::U32 =
    abi::num(0x20000000 | 0x10000000); // NO_DMA_BARRIER_START | NO_DMA_BARRIER_END
pub const BLIT_SRC_GEM: abi::U32 = abi::num(0x04000000);
pub const BLIT_DST_GEM: abi::U32 = abi::num(0x02000000);
pub const BLIT_NON_CACHED: abi::U32 = abi::num(0x01000000);
pub const OV_PIPE_SHARE: abi::U32 = abi::num(0x00800000);
pub const DEINTERLACE_ODD: abi::U32 = abi::num(0x00400000);
pub const OV_PLAY_NOWAIT: abi::U32 = abi::num(0x00200000);
pub const SOURCE_ROTATED_90: abi::U32 = abi::num(0x00100000);
pub const OVERLAY_PP_CFG_EN: abi::U32 = abi::num(0x00080000);
pub const BACKEND_COMPOSITION: abi::U32 = abi::num(0x00040000);
pub const BORDERFILL_SUPPORTED: abi::U32 = abi::num(0x00010000);
pub const SECURE_OVERLAY_SESSION: abi::U32 = abi::num(0x00008000);
pub const OV_PIPE_FORCE_DMA: abi::U32 = abi::num(0x00004000);
pub const MEMORY_ID_TYPE_FB: abi::U32 = abi::num(0x00001000);
pub const BWC_EN: abi::U32 = abi::num(0x00000400);
pub const DECIMATION_EN: abi::U32 = abi::num(0x00000800);

pub const MDSS_MDP_ROT_ONLY: abi::U32 = abi::num(0x80);
pub const MDSS_MDP_RIGHT_MIXER: abi::U32 = abi::num(0x100);

/// Disables transparency matching in the `transp_mask` field.
pub const TRANSP_NOP: abi::U32 = abi::num(0xffffffff);
/// Disables constant alpha in the `alpha` field.
pub const ALPHA_NOP: abi::U32 = abi::num(0xff);

// Pixel formats, given in the `format` field of an image descriptor.
pub const RGB_565: abi::U32 = abi::num(0);
pub const XRGB_8888: abi::U32 = abi::num(1);
pub const Y_CBCR_H2V2: abi::U32 = abi::num(2);
pub const Y_CBCR_H2V2_ADRENO: abi::U32 = abi::num(3);
pub const ARGB_8888: abi::U32 = abi::num(4);
pub const RGB_888: abi::U32 = abi::num(5);
pub const Y_CRCB_H2V2: abi::U32 = abi::num(6);
pub const YCRYCB_H2V1: abi::U32 = abi::num(7);
pub const CBYCRY_H2V1: abi::U32 = abi::num(8);
pub const Y_CRCB_H2V1: abi::U32 = abi::num(9);
pub const Y_CBCR_H2V1: abi::U32 = abi::num(10);
pub const Y_CRCB_H1V2: abi::U32 = abi::num(11);
pub const Y_CBCR_H1V2: abi::U32 = abi::num(12);
pub const RGBA_8888: abi::U32 = abi::num(13);
pub const BGRA_8888: abi::U32 = abi::num(14);
pub const RGBX_8888: abi::U32 = abi::num(15);
pub const Y_CRCB_H2V2_TILE: abi::U32 = abi::num(16);
pub const Y_CBCR_H2V2_TILE: abi::U32 = abi::num(17);
pub const Y_CR_CB_H2V2: abi::U32 = abi::num(18);
pub const Y_CR_CB_GH2V2: abi::U32 = abi::num(19);
pub const Y_CB_CR_H2V2: abi::U32 = abi::num(20);
pub const Y_CRCB_H1V1: abi::U32 = abi::num(21);
pub const Y_CBCR_H1V1: abi::U32 = abi::num(22);
pub const YCRCB_H1V1: abi::U32 = abi::num(23);
pub const YCBCR_H1V1: abi::U32 = abi::num(24);
pub const BGR_565: abi::U32 = abi::num(25);
pub const BGR_888: abi::U32 = abi::num(26);
pub const Y_CBCR_H2V2_VENUS: abi::U32 = abi::num(27);
pub const BGRX_8888: abi::U32 = abi::num(28);
pub const IMGTYPE_LIMIT: abi::U32 = abi::num(29);
pub const RGB_BORDERFILL: abi::U32 = abi::num(30);
/// First format number reserved for framebuffer-native formats.
pub const IMGTYPE2_START: abi::U32 = abi::num(0x10000);
pub const FB_FORMAT: abi::U32 = abi::num(0x10000); // IMGTYPE2_START
pub const IMGTYPE_LIMIT2: abi::U32 = abi::num(0x10001);

// Memory an image descriptor may refer to.
pub const PMEM_IMG: abi::U32 = abi::num(0);
pub const FB_IMG: abi::U32 = abi::num(1);

// Components of the hue/saturation/intensity/contrast adjustment.
pub const HSIC_HUE: abi::U32 = abi::num(0);
pub const HSIC_SAT: abi::U32 = abi::num(1);
pub const HSIC_INT: abi::U32 = abi::num(2);
pub const HSIC_CON: abi::U32 = abi::num(3);
pub const NUM_HSIC_PARAM: abi::U32 = abi::num(4);

// Page protection modes of the framebuffer memory.
pub const FB_PAGE_PROTECTION_NONCACHED: abi::U32 = abi::num(0);
pub const FB_PAGE_PROTECTION_WRITECOMBINE: abi::U32 = abi::num(1);
pub const FB_PAGE_PROTECTION_WRITETHROUGHCACHE: abi::U32 = abi::num(2);
pub const FB_PAGE_PROTECTION_WRITEBACKCACHE: abi::U32 = abi::num(3);
pub const FB_PAGE_PROTECTION_WRITEBACKWACACHE: abi::U32 = abi::num(4);
pub const FB_PAGE_PROTECTION_INVALID: abi::U32 = abi::num(5);
pub const NUM_FB_PAGE_PROTECTION_VALUES: abi::U32 = abi::num(5);

/// A rectangle within an image, given in pixels.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Rect {
    pub x: abi::U32,
    pub y: abi::U32,
    pub w: abi::U32,
    pub h: abi::U32,
}

/// An image taking part in a blit, identified by the file descriptor
/// of its backing memory.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Img {
    pub width: abi::U32,
    pub height: abi::U32,
    pub format: abi::U32,
    pub offset: abi::U32,
    pub memory_id: abi::I32,
    pub priv_: abi::U32,
}

// Color conversion matrix directions and dimensions.
pub const CCS_RGB2YUV: abi::I32 = abi::num(0);
pub const CCS_YUV2RGB: abi::I32 = abi::num(1);
pub const CCS_SIZE: usize = 9;
pub const BV_SIZE: usize = 3;

/// Color conversion matrix of the older display generations.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Ccs {
    pub direction: abi::I32,
    pub ccs: [abi::U16; CCS_SIZE],
    pub bv: [abi::U16; BV_SIZE],
}

/// Color space conversion matrix with pre/post bias and limit vectors.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Csc {
    pub id: abi::I32,
    pub csc_mv: [abi::U32; 9],
    pub csc_pre_bv: [abi::U32; 3],
    pub csc_post_bv: [abi::U32; 3],
    pub csc_pre_lv: [abi::U32; 6],
    pub csc_post_lv: [abi::U32; 6],
}

/// Version of [`BlitReq`] implemented here.
pub const BLIT_REQ_VERSION: abi::U32 = abi::num(2);

/// A single blit operation from a source to a destination rectangle.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct BlitReq {
    pub src: Img,
    pub dst: Img,
    pub src_rect: Rect,
    pub dst_rect: Rect,
    pub alpha: abi::U32,
    pub transp_mask: abi::U32,
    pub flags: abi::U32,
    pub sharpening_strength: abi::I32,
}

/// A counted list of blit operations, submitted as one request. The
/// requests follow the header as a flexible array.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct BlitReqList {
    pub count: abi::U32,
    pub req: [BlitReq; 0],
}

/// Scaler configuration table upload.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct QseedCfg {
    pub table_num: abi::U32,
    pub ops: abi::U32,
    pub len: abi::U32,
    pub data: Option<abi::Ptr<abi::U32>>,
}

/// Sharpening filter configuration.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct SharpCfg {
    pub flags: abi::U32,
    pub strength: abi::U32,
    pub edge_thr: abi::U32,
    pub smooth_thr: abi::U32,
    pub noise_thr: abi::U32,
}

/// Scaler configuration, addressed to a hardware block.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct QseedCfgData {
    pub block: abi::U32,
    pub qseed_data: QseedCfg,
}

// Post-processing configuration operations, given in the `ops` fields.
pub const PP_OPS_ENABLE: abi::U32 = abi::num(0x1);
pub const PP_OPS_READ: abi::U32 = abi::num(0x2);
pub const PP_OPS_WRITE: abi::U32 = abi::num(0x4);
pub const PP_OPS_DISABLE: abi::U32 = abi::num(0x8);
pub const PP_IGC_FLAG_ROM0: abi::U32 = abi::num(0x10);
pub const PP_IGC_FLAG_ROM1: abi::U32 = abi::num(0x20);

// Addressing of post-processing blocks.
pub const MDSS_PP_DSPP_CFG: abi::U32 = abi::num(0x000);
pub const MDSS_PP_SSPP_CFG: abi::U32 = abi::num(0x100);
pub const MDSS_PP_LM_CFG: abi::U32 = abi::num(0x200);
pub const MDSS_PP_WB_CFG: abi::U32 = abi::num(0x300);
pub const MDSS_PP_ARG_MASK: u32 = 0x3C00;
pub const MDSS_PP_ARG_NUM: u32 = 4;
pub const MDSS_PP_ARG_SHIFT: u32 = 10;
pub const MDSS_PP_LOCATION_MASK: u32 = 0x0300;
pub const MDSS_PP_LOGICAL_MASK: u32 = 0x00FF;

/// Adds the block argument `arg` to the block address `var`.
pub const fn mdss_pp_add_arg(var: u32, arg: u32) -> u32 {
    var | (0x1 << (MDSS_PP_ARG_SHIFT + arg))
}

/// Extracts the block argument `x` from the block address `var`.
pub const fn pp_arg(x: u32, var: u32) -> u32 {
    var & (0x1 << (MDSS_PP_ARG_SHIFT + x))
}

/// Extracts the location bits of the block address `var`.
pub const fn pp_locat(var: u32) -> u32 {
    var & MDSS_PP_LOCATION_MASK
}

/// Extracts the logical block number of the block address `var`.
pub const fn pp_block(var: u32) -> u32 {
    var & MDSS_PP_LOGICAL_MASK
}

// Per-overlay post-processing selectors, given in `config_ops`.
pub const OVERLAY_PP_CSC_CFG: abi::U32 = abi::num(0x1);
pub const OVERLAY_PP_QSEED_CFG: abi::U32 = abi::num(0x2);
pub const OVERLAY_PP_PA_CFG: abi::U32 = abi::num(0x4);
pub const OVERLAY_PP_IGC_CFG: abi::U32 = abi::num(0x8);
pub const OVERLAY_PP_SHARP_CFG: abi::U32 = abi::num(0x10);
pub const OVERLAY_PP_HIST_CFG: abi::U32 = abi::num(0x20);
pub const OVERLAY_PP_HIST_LUT_CFG: abi::U32 = abi::num(0x40);

pub const CSC_FLAG_ENABLE: abi::U32 = abi::num(0x1);
pub const CSC_FLAG_YUV_IN: abi::U32 = abi::num(0x2);
pub const CSC_FLAG_YUV_OUT: abi::U32 = abi::num(0x4);

/// Color space conversion configuration.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct CscCfg {
    pub flags: abi::U32,
    pub csc_mv: [abi::U32; 9],
    pub csc_pre_bv: [abi::U32; 3],
    pub csc_post_bv: [abi::U32; 3],
    pub csc_pre_lv: [abi::U32; 6],
    pub csc_post_lv: [abi::U32; 6],
}

/// Color space conversion, addressed to a hardware block.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct CscCfgData {
    pub block: abi::U32,
    pub csc_data: CscCfg,
}

/// Picture adjustment (hue, saturation, value, contrast).
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct PaCfg {
    pub flags: abi::U32,
    pub hue_adj: abi::U32,
    pub sat_adj: abi::U32,
    pub val_adj: abi::U32,
    pub cont_adj: abi::U32,
}

/// Inverse gamma correction table upload.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct IgcLutData {
    pub block: abi::U32,
    pub len: abi::U32,
    pub ops: abi::U32,
    pub c0_c1_data: Option<abi::Ptr<abi::U32>>,
    pub c2_data: Option<abi::Ptr<abi::U32>>,
}

/// Histogram collection configuration.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct HistogramCfg {
    pub ops: abi::U32,
    pub block: abi::U32,
    pub frame_cnt: abi::U8,
    pub bit_mask: abi::U8,
    pub num_bins: abi::U16,
}

/// Histogram-derived look-up table upload.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct HistLutData {
    pub block: abi::U32,
    pub ops: abi::U32,
    pub len: abi::U32,
    pub data: Option<abi::Ptr<abi::U32>>,
}

/// Per-overlay post-processing parameters, selected via `config_ops`.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct OverlayPpParams {
    pub config_ops: abi::U32,
    pub csc_cfg: CscCfg,
    pub qseed_cfg: [QseedCfg; 2],
    pub pa_cfg: PaCfg,
    pub igc_cfg: IgcLutData,
    pub sharp_cfg: SharpCfg,
    pub hist_cfg: HistogramCfg,
    pub hist_lut_cfg: HistLutData,
}

/// An overlay pipe configuration: source image, scaling, z-order, and
/// blending of one pipe.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Overlay {
    pub src: msmfb::Img,
    pub src_rect: Rect,
    pub dst_rect: Rect,
    pub z_order: abi::U32,
    pub is_fg: abi::U32,
    pub alpha: abi::U32,
    pub transp_mask: abi::U32,
    pub flags: abi::U32,
    pub id: abi::U32,
    pub user_data: [abi::U32; 7],
    pub horz_deci: abi::U8,
    pub vert_deci: abi::U8,
    pub overlay_pp_cfg: OverlayPpParams,
}

/// Histogram read-back of the older display generations.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Histogram {
    pub frame_cnt: abi::U32,
    pub bin_cnt: abi::U32,
    pub r: Option<abi::Ptr<abi::U32>>,
    pub g: Option<abi::Ptr<abi::U32>>,
    pub b: Option<abi::Ptr<abi::U32>>,
}

// Display interfaces a MISR signature can be collected from.
pub const DISPLAY_MISR_EDP: abi::U32 = abi::num(0);
pub const DISPLAY_MISR_DSI0: abi::U32 = abi::num(1);
pub const DISPLAY_MISR_DSI1: abi::U32 = abi::num(2);
pub const DISPLAY_MISR_HDMI: abi::U32 = abi::num(3);
pub const DISPLAY_MISR_LCDC: abi::U32 = abi::num(4);
pub const DISPLAY_MISR_ATV: abi::U32 = abi::num(5);
pub const DISPLAY_MISR_DSI_CMD: abi::U32 = abi::num(6);
pub const DISPLAY_MISR_MAX: abi::U32 = abi::num(7);

// MISR operation modes.
pub const MISR_OP_NONE: abi::U32 = abi::num(0);
pub const MISR_OP_SFM: abi::U32 = abi::num(1);
pub const MISR_OP_MFM: abi::U32 = abi::num(2);
pub const MISR_OP_BM: abi::U32 = abi::num(3);
pub const MISR_OP_MAX: abi::U32 = abi::num(4);

/// MISR signature request for display integrity testing.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Misr {
    pub block_id: abi::U32,
    pub frame_count: abi::U32,
    pub crc_op_mode: abi::U32,
    pub crc_value: [abi::U32; 32],
}

// Hardware blocks addressable by the post-processing requests.
pub const BLOCK_RESERVED: abi::U32 = abi::num(0);
pub const BLOCK_OVERLAY_0: abi::U32 = abi::num(1);
pub const BLOCK_OVERLAY_1: abi::U32 = abi::num(2);
pub const BLOCK_VG_1: abi::U32 = abi::num(3);
pub const BLOCK_VG_2: abi::U32 = abi::num(4);
pub const BLOCK_RGB_1: abi::U32 = abi::num(5);
pub const BLOCK_RGB_2: abi::U32 = abi::num(6);
pub const BLOCK_DMA_P: abi::U32 = abi::num(7);
pub const BLOCK_DMA_S: abi::U32 = abi::num(8);
pub const BLOCK_DMA_E: abi::U32 = abi::num(9);
pub const BLOCK_OVERLAY_2: abi::U32 = abi::num(10);
pub const LOGICAL_BLOCK_DISP_0: abi::U32 = abi::num(0x10);
pub const LOGICAL_BLOCK_DISP_1: abi::U32 = abi::num(0x11);
pub const LOGICAL_BLOCK_DISP_2: abi::U32 = abi::num(0x12);
pub const BLOCK_MAX: abi::U32 = abi::num(0x13);

/// Arms histogram collection on a hardware block.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct HistogramStartReq {
    pub block: abi::U32,
    pub frame_cnt: abi::U8,
    pub bit_mask: abi::U8,
    pub num_bins: abi::U16,
}

/// Reads collected histogram data back from a hardware block.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct HistogramData {
    pub block: abi::U32,
    pub bin_cnt: abi::U32,
    pub c0: Option<abi::Ptr<abi::U32>>,
    pub c1: Option<abi::Ptr<abi::U32>>,
    pub c2: Option<abi::Ptr<abi::U32>>,
    pub extra_info: Option<abi::Ptr<abi::U32>>,
}

/// Polynomial color correction coefficients of one color component.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct PccCoeff {
    pub c: abi::U32,
    pub r: abi::U32,
    pub g: abi::U32,
    pub b: abi::U32,
    pub rr: abi::U32,
    pub gg: abi::U32,
    pub bb: abi::U32,
    pub rg: abi::U32,
    pub gb: abi::U32,
    pub rb: abi::U32,
    pub rgb_0: abi::U32,
    pub rgb_1: abi::U32,
}

/// Polynomial color correction, addressed to a hardware block.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct PccCfgData {
    pub block: abi::U32,
    pub ops: abi::U32,
    pub r: PccCoeff,
    pub g: PccCoeff,
    pub b: PccCoeff,
}

pub const GAMUT_TABLE_NUM: usize = 8;

// Look-up table types of [`LutCfgData`].
pub const LUT_IGC: abi::U32 = abi::num(0);
pub const LUT_PGC: abi::U32 = abi::num(1);
pub const LUT_HIST: abi::U32 = abi::num(2);
pub const LUT_MAX: abi::U32 = abi::num(3);

/// One segment of a polynomial gamma correction curve.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct ArGcLutData {
    pub x_start: abi::U32,
    pub slope: abi::U32,
    pub offset: abi::U32,
}

/// Polynomial gamma correction table upload.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct PgcLutData {
    pub block: abi::U32,
    pub flags: abi::U32,
    pub num_r_stages: abi::U8,
    pub num_g_stages: abi::U8,
    pub num_b_stages: abi::U8,
    pub r_data: Option<abi::Ptr<ArGcLutData>>,
    pub g_data: Option<abi::Ptr<ArGcLutData>>,
    pub b_data: Option<abi::Ptr<ArGcLutData>>,
}

/// The look-up table carried by [`LutCfgData`], selected via
/// `lut_type`.
#[derive(Clone, Copy)]
#[repr(C)]
pub union LutData {
    pub igc_lut_data: IgcLutData,
    pub pgc_lut_data: PgcLutData,
    pub hist_lut_data: HistLutData,
}

/// Look-up table upload, selected via `lut_type`.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct LutCfgData {
    pub lut_type: abi::U32,
    pub data: LutData,
}

/// Backlight scaling limits.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct BlScaleData {
    pub min_lvl: abi::U32,
    pub scale: abi::U32,
}

/// Picture adjustment, addressed to a hardware block.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct PaCfgData {
    pub block: abi::U32,
    pub pa_data: PaCfg,
}

/// Dither configuration, addressed to a hardware block.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct DitherCfgData {
    pub block: abi::U32,
    pub flags: abi::U32,
    pub g_y_depth: abi::U32,
    pub r_cr_depth: abi::U32,
    pub b_cb_depth: abi::U32,
}

/// Gamut mapping table upload.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct GamutCfgData {
    pub block: abi::U32,
    pub flags: abi::U32,
    pub gamut_first: abi::U32,
    pub tbl_size: [abi::U32; GAMUT_TABLE_NUM],
    pub r_tbl: [Option<abi::Ptr<abi::U16>>; GAMUT_TABLE_NUM],
    pub g_tbl: [Option<abi::Ptr<abi::U16>>; GAMUT_TABLE_NUM],
    pub b_tbl: [Option<abi::Ptr<abi::U16>>; GAMUT_TABLE_NUM],
}

/// A single calibration register access.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct CalibConfigData {
    pub ops: abi::U32,
    pub addr: abi::U32,
    pub data: abi::U32,
}

/// A batched calibration register access.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct CalibConfigBuffer {
    pub ops: abi::U32,
    pub size: abi::U32,
    pub buffer: Option<abi::Ptr<abi::U32>>,
}

/// Queries or moves the calibration state machine.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct CalibDcmState {
    pub ops: abi::U32,
    pub dcm_state: abi::U32,
}

// States of the calibration state machine.
pub const DCM_UNINIT: abi::U32 = abi::num(0);
pub const DCM_UNBLANK: abi::U32 = abi::num(1);
pub const DCM_ENTER: abi::U32 = abi::num(2);
pub const DCM_EXIT: abi::U32 = abi::num(3);
pub const DCM_BLANK: abi::U32 = abi::num(4);

pub const MDSS_MAX_BL_BRIGHTNESS: usize = 255;
pub const AD_BL_LIN_LEN: usize = MDSS_MAX_BL_BRIGHTNESS + 1;

// Operating modes of the assertive-display core.
pub const MDSS_AD_MODE_AUTO_BL: abi::U32 = abi::num(0x0);
pub const MDSS_AD_MODE_AUTO_STR: abi::U32 = abi::num(0x1);
pub const MDSS_AD_MODE_TARG_STR: abi::U32 = abi::num(0x3);
pub const MDSS_AD_MODE_MAN_STR: abi::U32 = abi::num(0x7);
pub const MDSS_AD_MODE_CALIB: abi::U32 = abi::num(0xF);

pub const PP_AD_INIT: abi::U32 = abi::num(0x10);
pub const PP_AD_CFG: abi::U32 = abi::num(0x20);

/// Assertive-display initialization tables.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct MdssAdInit {
    pub asym_lut: [abi::U32; 33],
    pub color_corr_lut: [abi::U32; 33],
    pub i_control: [abi::U8; 2],
    pub black_lvl: abi::U16,
    pub white_lvl: abi::U16,
    pub var: abi::U8,
    pub limit_ampl: abi::U8,
    pub i_dither: abi::U8,
    pub slope_max: abi::U8,
    pub slope_min: abi::U8,
    pub dither_ctl: abi::U8,
    pub format: abi::U8,
    pub auto_size: abi::U8,
    pub frame_w: abi::U16,
    pub frame_h: abi::U16,
    pub logo_v: abi::U8,
    pub logo_h: abi::U8,
    pub bl_lin_len: abi::U32,
    pub bl_lin: Option<abi::Ptr<abi::U32>>,
    pub bl_lin_inv: Option<abi::Ptr<abi::U32>>,
}

pub const MDSS_AD_BL_CTRL_MODE_EN: abi::U32 = abi::num(1);
pub const MDSS_AD_BL_CTRL_MODE_DIS: abi::U32 = abi::num(0);

/// Assertive-display runtime configuration.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct MdssAdCfg {
    pub mode: abi::U32,
    pub al_calib_lut: [abi::U32; 33],
    pub backlight_min: abi::U16,
    pub backlight_max: abi::U16,
    pub backlight_scale: abi::U16,
    pub amb_light_min: abi::U16,
    pub filter: [abi::U16; 2],
    pub calib: [abi::U16; 4],
    pub strength_limit: abi::U8,
    pub t_filter_recursion: abi::U8,
    pub stab_itr: abi::U16,
    pub bl_ctrl_mode: abi::U32,
}

/// The parameter block carried by [`MdssAdInitCfg`], selected via
/// `ops`.
#[derive(Clone, Copy)]
#[repr(C)]
pub union MdssAdInitCfgParams {
    pub init: MdssAdInit,
    pub cfg: MdssAdCfg,
}

/// Assertive-display initialization or configuration, selected via
/// `ops`.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct MdssAdInitCfg {
    pub ops: abi::U32,
    pub params: MdssAdInitCfgParams,
}

/// The input value carried by [`MdssAdInput`], selected via `mode`.
#[derive(Clone, Copy)]
#[repr(C)]
pub union MdssAdInputIn {
    pub amb_light: abi::U32,
    pub strength: abi::U32,
    pub calib_bl: abi::U32,
}

/// Feeds an input value to the assertive-display core and reads back
/// its response.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct MdssAdInput {
    pub mode: abi::U32,
    pub in_: MdssAdInputIn,
    pub output: abi::U32,
}

pub const MDSS_CALIB_MODE_BL: abi::U32 = abi::num(0x1);

/// Enables calibration of selected display parameters.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct MdssCalibCfg {
    pub ops: abi::U32,
    pub calib_mask: abi::U32,
}

// Post-processing operations, given in the `op` field of
// [`super::msmfb::MdpPp`].
pub const OP_PCC_CFG: abi::U32 = abi::num(0);
pub const OP_CSC_CFG: abi::U32 = abi::num(1);
pub const OP_LUT_CFG: abi::U32 = abi::num(2);
pub const OP_QSEED_CFG: abi::U32 = abi::num(3);
pub const BL_SCALE_CFG: abi::U32 = abi::num(4);
pub const OP_PA_CFG: abi::U32 = abi::num(5);
pub const OP_DITHER_CFG: abi::U32 = abi::num(6);
pub const OP_GAMUT_CFG: abi::U32 = abi::num(7);
pub const OP_CALIB_CFG: abi::U32 = abi::num(8);
pub const OP_AD_CFG: abi::U32 = abi::num(9);
pub const OP_AD_INPUT: abi::U32 = abi::num(10);
pub const OP_CALIB_MODE: abi::U32 = abi::num(11);
pub const OP_CALIB_BUFFER: abi::U32 = abi::num(12);
pub const OP_CALIB_DCM_STATE: abi::U32 = abi::num(13);
pub const OP_MAX: abi::U32 = abi::num(14);

// Formats of the writeback interface.
pub const WB_FORMAT_NV12: abi::U32 = abi::num(0);
pub const WB_FORMAT_RGB_565: abi::U32 = abi::num(1);
pub const WB_FORMAT_RGB_888: abi::U32 = abi::num(2);
pub const WB_FORMAT_XRGB_8888: abi::U32 = abi::num(3);
pub const WB_FORMAT_ARGB_8888: abi::U32 = abi::num(4);
pub const WB_FORMAT_BGRA_8888: abi::U32 = abi::num(5);
pub const WB_FORMAT_BGRX_8888: abi::U32 = abi::num(6);
pub const WB_FORMAT_ARGB_8888_INPUT_ALPHA: abi::U32 = abi::num(7);

/// Base-layer blend configuration.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct BlendCfg {
    pub is_premultiplied: abi::U32,
}

/// Writeback mixer configuration.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct MixerCfg {
    pub writeback_format: abi::U32,
    pub alpha: abi::U32,
}

/// Capabilities of the display hardware.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct MdssHwCaps {
    pub mdp_rev: abi::U32,
    pub rgb_pipes: abi::U8,
    pub vig_pipes: abi::U8,
    pub dma_pipes: abi::U8,
    pub features: abi::U32,
}

pub const MAX_FENCE_FD: usize = 32;
pub const BUF_SYNC_FLAG_WAIT: abi::U32 = abi::num(1);

/// Exchanges acquire fences for release fences of one display frame.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct BufSync {
    pub flags: abi::U32,
    pub acq_fen_fd_cnt: abi::U32,
    pub acq_fen_fd: Option<abi::Ptr<abi::I32>>,
    pub rel_fen_fd: Option<abi::Ptr<abi::I32>>,
}

/// A counted list of blit operations with fence synchronization. The
/// requests follow the header as a flexible array.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct AsyncBlitReqList {
    pub sync: BufSync,
    pub count: abi::U32,
    pub req: [BlitReq; 0],
}

pub const DISPLAY_COMMIT_OVERLAY: abi::U32 = abi::num(1);

/// Fences of one display commit, carried inline.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct BufFence {
    pub flags: abi::U32,
    pub acq_fen_fd_cnt: abi::U32,
    pub acq_fen_fd: [abi::I32; MAX_FENCE_FD],
    pub rel_fen_fd: [abi::I32; MAX_FENCE_FD],
}

/// Atomically commits a prepared frame to the display.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct DisplayCommit {
    pub flags: abi::U32,
    pub wait_for_finish: abi::U32,
    pub var: fb::VarScreeninfo,
    pub buf_fence: BufFence,
}

/// Page protection mode of the framebuffer memory.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct PageProtection {
    pub page_protection: abi::U32,
}

/// Description of one mixer pipe.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct MixerInfo {
    pub pndx: abi::I32,
    pub pnum: abi::I32,
    pub ptype: abi::I32,
    pub mixer_num: abi::I32,
    pub z_order: abi::I32,
}

pub const MAX_PIPE_PER_MIXER: usize = 4;

// Subsystems a register access may address.
pub const DISPLAY_SUBSYSTEM_ID: abi::U32 = abi::num(0);
pub const ROTATOR_SUBSYSTEM_ID: abi::U32 = abi::num(1);

// IOMMU domains the display hardware maps buffers into.
pub const IOMMU_DOMAIN_CP: abi::U32 = abi::num(0);
pub const IOMMU_DOMAIN_NS: abi::U32 = abi::num(1);

// Writeback mirroring control.
pub const WRITEBACK_MIRROR_OFF: abi::U32 = abi::num(0);
pub const WRITEBACK_MIRROR_ON: abi::U32 = abi::num(1);
pub const WRITEBACK_MIRROR_PAUSE: abi::U32 = abi::num(2);
pub const WRITEBACK_MIRROR_RESUME: abi::U32 = abi::num(3);
