use crate::{
    IconId, MenuSelection, ModeAction, ModeAxis, ModeController, ModeId, PowerError,
    SelectionOutcome,
    tests::mocks::{MockHardware, RecordingShell, ShellCommand},
};

use std::{cell::Cell, rc::Rc};

#[allow(clippy::unwrap_used)]
fn controller(hardware: MockHardware, kde: bool) -> ModeController<MockHardware, RecordingShell> {
    ModeController::new(hardware, RecordingShell::default(), Box::new(move || kde)).unwrap()
}

/// WHAT: Bootstrap reads both axes and builds headers, entries and exit
/// WHY: The menu must reflect the hardware before the first click
#[test]
fn given_hardware_when_bootstrapping_then_menu_built_in_order() {
    // Given: Hardware reporting quiet / standard
    let hardware = MockHardware::dell();

    // When: Building the controller off KDE
    let ctrl = controller(hardware, false);

    // Then: Headers, one entry per mode, then exit
    let thermal_action = |mode: &str| ModeAction {
        axis: ModeAxis::Thermal,
        mode: ModeId::from(mode),
    };
    let battery_action = |mode: &str| ModeAction {
        axis: ModeAxis::Battery,
        mode: ModeId::from(mode),
    };
    assert_eq!(
        ctrl.shell().commands,
        vec![
            ShellCommand::Header(ModeAxis::Thermal, "Current Thermal Mode: Quiet".to_string()),
            ShellCommand::Action(ModeAxis::Thermal, "Balanced".to_string(), thermal_action("balanced")),
            ShellCommand::Action(ModeAxis::Thermal, "Quiet".to_string(), thermal_action("quiet")),
            ShellCommand::Header(ModeAxis::Battery, "Current Battery Mode: Standard".to_string()),
            ShellCommand::Action(ModeAxis::Battery, "Standard".to_string(), battery_action("standard")),
            ShellCommand::Action(
                ModeAxis::Battery,
                "Primarily AC".to_string(),
                battery_action("primarily_ac")
            ),
            ShellCommand::Exit,
        ]
    );
    assert_eq!(ctrl.hardware().reads, vec![ModeAxis::Thermal, ModeAxis::Battery]);
}

/// WHAT: Bootstrap on KDE sets the icon for the initial thermal mode
/// WHY: The tray starts out showing the real thermal state
#[test]
fn given_kde_session_when_bootstrapping_then_icon_set() {
    // Given/When: Quiet hardware on KDE
    let ctrl = controller(MockHardware::dell(), true);

    // Then: Ninja face shown
    assert_eq!(ctrl.shell().last_icon(), Some(IconId::FaceNinja));
}

/// WHAT: Selecting a thermal mode writes, re-reads and refreshes the display
/// WHY: Core end-to-end flow of a menu click
#[test]
#[allow(clippy::unwrap_used)]
fn given_quiet_thermal_when_selecting_balanced_then_header_and_icon_updated() {
    // Given: Controller on KDE with thermal = quiet
    let mut ctrl = controller(MockHardware::dell(), true);

    // When: Selecting balanced
    ctrl.select_mode(ModeAxis::Thermal, &ModeId::from("balanced"))
        .unwrap();

    // Then: Setter got balanced, getter re-invoked, header and icon follow
    let hw = ctrl.hardware();
    assert_eq!(hw.applied, vec![(ModeAxis::Thermal, ModeId::from("balanced"))]);
    assert_eq!(
        hw.reads,
        vec![ModeAxis::Thermal, ModeAxis::Battery, ModeAxis::Thermal]
    );
    assert_eq!(
        ctrl.shell().last_header(ModeAxis::Thermal),
        Some("Current Thermal Mode: Balanced")
    );
    assert_eq!(ctrl.shell().last_icon(), Some(IconId::FaceSmile));
    assert_eq!(ctrl.current(ModeAxis::Thermal), &ModeId::from("balanced"));
    assert_eq!(ctrl.label(ModeAxis::Thermal), "Balanced");
}

/// WHAT: The displayed mode follows the re-read, not the request
/// WHY: Refused or coerced requests must be surfaced faithfully
#[test]
#[allow(clippy::unwrap_used)]
fn given_hardware_ignoring_writes_when_selecting_then_old_mode_displayed() {
    // Given: Hardware that accepts writes but keeps reporting quiet
    let mut hardware = MockHardware::dell();
    hardware.ignore_writes = true;
    let mut ctrl = controller(hardware, true);

    // When: Selecting balanced
    ctrl.select_mode(ModeAxis::Thermal, &ModeId::from("balanced"))
        .unwrap();

    // Then: Still quiet everywhere
    assert_eq!(ctrl.current(ModeAxis::Thermal), &ModeId::from("quiet"));
    assert_eq!(
        ctrl.shell().last_header(ModeAxis::Thermal),
        Some("Current Thermal Mode: Quiet")
    );
    assert_eq!(ctrl.shell().last_icon(), Some(IconId::FaceNinja));
}

/// WHAT: Battery transitions never consult the icon policy
/// WHY: The icon only represents the thermal axis
#[test]
#[allow(clippy::unwrap_used)]
fn given_battery_selection_when_applied_then_icon_policy_not_invoked() {
    // Given: A counting desktop probe
    let probes = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&probes);
    let mut ctrl = ModeController::new(
        MockHardware::dell(),
        RecordingShell::default(),
        Box::new(move || {
            counter.set(counter.get() + 1);
            true
        }),
    )
    .unwrap();
    let probes_after_bootstrap = probes.get();
    let icons_after_bootstrap = ctrl.shell().icon_count();

    // When: Switching the battery mode
    ctrl.select_mode(ModeAxis::Battery, &ModeId::from("primarily_ac"))
        .unwrap();

    // Then: Header updated, probe and icon untouched
    assert_eq!(
        ctrl.shell().last_header(ModeAxis::Battery),
        Some("Current Battery Mode: Primarily AC")
    );
    assert_eq!(probes.get(), probes_after_bootstrap);
    assert_eq!(ctrl.shell().icon_count(), icons_after_bootstrap);
}

/// WHAT: The desktop probe is evaluated on every thermal refresh
/// WHY: A session change mid-run must be honoured at the next transition
#[test]
#[allow(clippy::unwrap_used)]
fn given_probe_flipping_when_selecting_thermal_then_gate_reevaluated() {
    // Given: Probe reporting non-KDE at bootstrap
    let kde = Rc::new(Cell::new(false));
    let gate = Rc::clone(&kde);
    let mut ctrl = ModeController::new(
        MockHardware::dell(),
        RecordingShell::default(),
        Box::new(move || gate.get()),
    )
    .unwrap();
    assert_eq!(ctrl.shell().icon_count(), 0);

    // When: The session becomes KDE and thermal changes
    kde.set(true);
    ctrl.select_mode(ModeAxis::Thermal, &ModeId::from("balanced"))
        .unwrap();

    // Then: Icon is now applied
    assert_eq!(ctrl.shell().last_icon(), Some(IconId::FaceSmile));
}

/// WHAT: A failing setter leaves the display untouched and is not retried
/// WHY: Failures are surfaced, never masked by optimistic updates
#[test]
fn given_failing_hardware_when_selecting_then_error_and_stale_display() {
    // Given: Hardware whose writes fail
    let mut hardware = MockHardware::dell();
    hardware.fail_writes = true;
    let mut ctrl = controller(hardware, true);
    let before = ctrl.shell().commands.len();

    // When: Selecting balanced
    let result = ctrl.select_mode(ModeAxis::Thermal, &ModeId::from("balanced"));

    // Then: Error returned, one attempt, no shell updates, state unchanged
    assert!(matches!(result, Err(PowerError::CommandSpawn { .. })));
    assert_eq!(ctrl.hardware().applied.len(), 1);
    assert_eq!(ctrl.shell().commands.len(), before);
    assert_eq!(ctrl.current(ModeAxis::Thermal), &ModeId::from("quiet"));
}

/// WHAT: Modes outside the enumerated list are rejected before any write
/// WHY: Only listed modes may reach the firmware
#[test]
fn given_unlisted_mode_when_selecting_then_unknown_mode_error() {
    // Given: Controller over a two-mode thermal list
    let mut ctrl = controller(MockHardware::dell(), false);

    // When: Requesting a mode that is not listed
    let result = ctrl.select_mode(ModeAxis::Thermal, &ModeId::from("performance"));

    // Then: Rejected without touching the hardware
    assert!(matches!(result, Err(PowerError::UnknownMode { .. })));
    assert!(ctrl.hardware().applied.is_empty());
}

/// WHAT: Dispatch routes mode records and exit requests
/// WHY: Every menu click goes through one handler
#[test]
#[allow(clippy::unwrap_used)]
fn given_menu_selections_when_dispatching_then_routed() {
    // Given: A controller
    let mut ctrl = controller(MockHardware::dell(), false);

    // When: Dispatching a battery record and then exit
    let applied = ctrl
        .dispatch(MenuSelection::Mode(ModeAction {
            axis: ModeAxis::Battery,
            mode: ModeId::from("primarily_ac"),
        }))
        .unwrap();
    let exit = ctrl.dispatch(MenuSelection::Exit).unwrap();

    // Then: The mode applied and exit reported
    assert_eq!(applied, SelectionOutcome::Applied);
    assert_eq!(exit, SelectionOutcome::Exit);
    assert_eq!(ctrl.current(ModeAxis::Battery), &ModeId::from("primarily_ac"));
}

/// WHAT: A failing re-read after a successful write leaves the display stale
/// WHY: Without a confirmed read the controller has nothing truthful to show
#[test]
fn given_failing_read_after_write_when_selecting_then_error_and_stale_display() {
    // Given: Hardware that accepts writes but cannot be read afterwards
    let mut hardware = MockHardware::dell();
    hardware.fail_reads_after_write = true;
    let mut ctrl = controller(hardware, true);
    let before = ctrl.shell().commands.len();

    // When: Selecting balanced
    let result = ctrl.select_mode(ModeAxis::Thermal, &ModeId::from("balanced"));

    // Then: Error returned, one write, one re-read, no shell updates
    assert!(matches!(result, Err(PowerError::CommandSpawn { .. })));
    assert_eq!(
        ctrl.hardware().applied,
        vec![(ModeAxis::Thermal, ModeId::from("balanced"))]
    );
    assert_eq!(
        ctrl.hardware().reads,
        vec![ModeAxis::Thermal, ModeAxis::Battery, ModeAxis::Thermal]
    );
    assert_eq!(ctrl.shell().commands.len(), before);
    assert_eq!(ctrl.shell().last_icon(), Some(IconId::FaceNinja));
    assert_eq!(ctrl.current(ModeAxis::Thermal), &ModeId::from("quiet"));
}
