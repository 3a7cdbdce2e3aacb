mod report;
mod smbios_ctl;

pub(crate) use report::parse_current_mode;

pub use smbios_ctl::{DEFAULT_BATTERY_MODES, DEFAULT_THERMAL_MODES, SmbiosCtl};

use crate::{CoreResult, ModeAxis, ModeId};

/// Access to the firmware's mode controls.
///
/// Implementations must be able to answer [`current`](Self::current) and
/// [`modes`](Self::modes) for both axes before a
/// [`ModeController`](crate::ModeController) is built on top of them.
pub trait HardwareInterface {
    /// Ordered list of selectable modes. Fixed for the lifetime of the value.
    fn modes(&self, axis: ModeAxis) -> &[ModeId];

    /// Read the mode the hardware currently reports.
    fn current(&mut self, axis: ModeAxis) -> CoreResult<ModeId>;

    /// Ask the hardware to switch modes.
    ///
    /// Success only means the request was accepted; callers re-read with
    /// [`current`](Self::current) to learn what actually took effect.
    fn apply(&mut self, axis: ModeAxis, mode: &ModeId) -> CoreResult<()>;
}
