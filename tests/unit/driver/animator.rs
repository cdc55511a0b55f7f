use super::*;
use crate::driver::host::FrameClock;
use crate::driver::sim::SimHost;

const MAX_FRAMES: u64 = 10_000;

fn container() -> ContainerSize {
    ContainerSize::new(800.0, 400.0).unwrap()
}

fn host() -> SimHost {
    SimHost::new(Some(container()), 60.0)
}

fn settle(anim: &mut PathAnimator, host: &mut SimHost) {
    assert!(host.run_until_idle(anim, MAX_FRAMES), "animation never settled");
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
}

#[test]
fn mount_draws_the_marker_at_the_arc_start() {
    let mut h = host();
    let mut anim = PathAnimator::mount(ArcCurve::default(), AnimatorOpts::default(), &mut h);
    assert!(anim.is_running());

    h.tick(&mut anim);
    let first = h.last_write().unwrap();
    // (5/100)·800 − 7.5, (45/50)·400 − 7.5
    assert!(close(first.origin, Point::new(32.5, 352.5)));

    settle(&mut anim, &mut h);
    assert_eq!(anim.current_progress(), 0.0);
    assert!(!anim.is_running());
}

#[test]
fn move_to_b_settles_on_half_arclength() {
    let mut h = host();
    let mut anim = PathAnimator::mount(ArcCurve::default(), AnimatorOpts::default(), &mut h);
    settle(&mut anim, &mut h);

    let start_ms = h.now_ms();
    anim.move_to(0.5, &mut h);
    settle(&mut anim, &mut h);

    assert_eq!(anim.current_progress(), 0.5);
    let last = h.last_write().unwrap();
    assert!(last.at_ms - start_ms >= 4000.0);
    assert!(close(last.origin, anim.marker_origin(0.5, container())));
    // Apex of the arc: (50/100)·800 − 7.5, (15/50)·400 − 7.5
    assert!(close(last.origin, Point::new(392.5, 112.5)));
}

#[test]
fn run_lasts_the_fixed_duration() {
    let mut h = host();
    let mut anim = PathAnimator::new(ArcCurve::default(), AnimatorOpts::default());
    anim.move_to(1.0, &mut h);

    h.run_for(&mut anim, 3950.0);
    assert!(anim.is_running());
    assert!(anim.displayed_progress() < 1.0);

    h.run_for(&mut anim, 100.0);
    assert!(!anim.is_running());
    assert_eq!(anim.current_progress(), 1.0);
}

#[test]
fn retarget_keeps_a_single_chain() {
    let mut h = host();
    let mut anim = PathAnimator::new(ArcCurve::default(), AnimatorOpts::default());

    anim.move_to(0.5, &mut h);
    anim.move_to(1.0, &mut h);
    assert_eq!(h.pending_frames(), 1);
    assert_eq!(h.cancelled_frames(), 1);

    h.run_for(&mut anim, 1000.0);
    anim.move_to(0.0, &mut h);
    assert_eq!(h.pending_frames(), 1);

    settle(&mut anim, &mut h);
    let writes = h.writes();
    assert!(
        writes.windows(2).all(|w| w[0].frame != w[1].frame),
        "two writes landed in one frame"
    );
    assert_eq!(anim.current_progress(), 0.0);
}

#[test]
fn retarget_resumes_from_the_drawn_position() {
    let mut h = host();
    let mut anim = PathAnimator::new(ArcCurve::default(), AnimatorOpts::default());
    anim.move_to(1.0, &mut h);
    h.run_for(&mut anim, 2000.0);

    let shown = anim.displayed_progress();
    assert!(shown > 0.3 && shown < 0.7, "shown = {shown}");

    anim.move_to(0.0, &mut h);
    assert_eq!(anim.current_progress(), shown);
    h.tick(&mut anim);
    // Ease-in: the first frame barely moves away from where the marker was.
    assert!((anim.displayed_progress() - shown).abs() < 0.01);
}

#[test]
fn final_progress_is_the_last_target_after_any_interruptions() {
    let mut h = host();
    let mut anim = PathAnimator::new(ArcCurve::default(), AnimatorOpts::default());
    let script = [(0.5, 300.0), (1.0, 10.0), (0.0, 2500.0), (0.5, 0.0), (1.0, 1200.0)];
    for (target, gap) in script {
        anim.move_to(target, &mut h);
        h.run_for(&mut anim, gap);
    }
    anim.move_to(0.5, &mut h);
    settle(&mut anim, &mut h);
    assert_eq!(anim.current_progress(), 0.5);
}

#[test]
fn return_trip_is_eased_not_a_jump() {
    let mut h = host();
    let mut anim = PathAnimator::new(ArcCurve::default(), AnimatorOpts::default());
    anim.move_to(0.5, &mut h);
    settle(&mut anim, &mut h);

    anim.move_to(0.0, &mut h);
    let mut seen = Vec::new();
    while anim.is_running() {
        h.tick(&mut anim);
        seen.push(anim.displayed_progress());
    }

    assert!(seen.len() > 200);
    assert!(seen.windows(2).all(|w| w[1] <= w[0]));
    // Slow start, fast middle, slow finish.
    assert!(seen[0] > 0.499);
    let mid = seen[seen.len() / 2];
    assert!((mid - 0.25).abs() < 0.02, "mid = {mid}");
    assert_eq!(*seen.last().unwrap(), 0.0);
}

#[test]
fn missing_container_skips_writes_but_keeps_running() {
    let mut h = SimHost::new(None, 60.0);
    let mut anim = PathAnimator::new(ArcCurve::default(), AnimatorOpts::default());
    anim.move_to(1.0, &mut h);

    h.run_for(&mut anim, 1000.0);
    assert!(h.writes().is_empty());
    assert!(anim.is_running());

    h.set_container(Some(container()));
    h.tick(&mut anim);
    assert_eq!(h.writes().len(), 1);

    settle(&mut anim, &mut h);
    assert_eq!(anim.current_progress(), 1.0);
}

#[test]
fn unmount_cancels_and_stops_writing() {
    let mut h = host();
    let mut anim = PathAnimator::mount(ArcCurve::default(), AnimatorOpts::default(), &mut h);
    anim.move_to(1.0, &mut h);
    h.run_for(&mut anim, 500.0);

    let stale = anim.pending_token().unwrap();
    let writes_before = h.writes().len();
    let last = anim.unmount(&mut h);
    assert!(last > 0.0 && last < 1.0);
    assert_eq!(h.pending_frames(), 0);

    // A host that still fires the revoked callback reaches a fresh animator as stale.
    let mut other = PathAnimator::new(ArcCurve::default(), AnimatorOpts::default());
    let now = h.now_ms();
    assert_eq!(other.on_frame(stale, now, &mut h), FrameOutcome::Stale);

    h.run_for(&mut other, 1000.0);
    assert_eq!(h.writes().len(), writes_before);
}

#[test]
fn stale_tokens_are_ignored() {
    let mut h = host();
    let mut anim = PathAnimator::new(ArcCurve::default(), AnimatorOpts::default());
    anim.move_to(0.5, &mut h);
    let old = anim.pending_token().unwrap();
    anim.move_to(1.0, &mut h);

    let now = h.now_ms();
    assert_eq!(anim.on_frame(old, now, &mut h), FrameOutcome::Stale);
    assert!(h.writes().is_empty());
    assert_eq!(anim.target(), Some(1.0));
}

#[test]
fn targets_outside_unit_interval_are_clamped() {
    let mut h = host();
    let mut anim = PathAnimator::new(ArcCurve::default(), AnimatorOpts::default());
    anim.move_to(7.0, &mut h);
    assert_eq!(anim.target(), Some(1.0));
    settle(&mut anim, &mut h);
    assert_eq!(anim.current_progress(), 1.0);
}

#[test]
fn custom_duration_and_ease_are_honored() {
    let opts = AnimatorOpts {
        duration_ms: 500.0,
        ease: Ease::Linear,
        ..AnimatorOpts::default()
    };
    let mut h = SimHost::new(Some(container()), 100.0);
    let mut anim = PathAnimator::new(ArcCurve::default(), opts);
    anim.move_to(1.0, &mut h);
    h.run_for(&mut anim, 250.0);
    assert!((anim.displayed_progress() - 0.5).abs() < 1e-9);
    settle(&mut anim, &mut h);
    assert!(h.now_ms() <= 520.0);
}

#[test]
fn nan_duration_does_not_keep_the_chain_alive() {
    let opts = AnimatorOpts {
        duration_ms: f64::NAN,
        ..AnimatorOpts::default()
    };
    let mut h = host();
    let mut anim = PathAnimator::new(ArcCurve::default(), opts);
    anim.move_to(1.0, &mut h);
    h.tick(&mut anim);
    assert!(!anim.is_running());
    assert_eq!(h.pending_frames(), 0);
    assert_eq!(anim.current_progress(), 1.0);
}
