use hand_tracking::*;

const SKIN: [u8; 4] = [210, 140, 110, 255];
const BACKDROP: [u8; 4] = [20, 30, 40, 255];

/// 80x60 frame with a skin blob in each half
fn two_hand_frame(left_rows: (u32, u32), right_rows: (u32, u32)) -> Frame {
    let mut frame = Frame::filled(80, 60, BACKDROP);
    frame.fill_rect(5, left_rows.0, 20, left_rows.1 - left_rows.0, SKIN);
    frame.fill_rect(50, right_rows.0, 20, right_rows.1 - right_rows.0, SKIN);
    frame
}

#[test]
fn test_each_strategy_finds_both_hands() {
    // camera-left blob rows 10..20, camera-right blob rows 40..50
    let frame = two_hand_frame((10, 20), (40, 50));
    let thresholds = SkinThresholds::default();

    let cluster = estimate_hands(&frame, &thresholds, &LargestCluster, false);
    assert_eq!(cluster.left, Some(14.5));
    assert_eq!(cluster.right, Some(44.5));
    assert_eq!(cluster.frame_height, 60);

    let centroid = estimate_hands(&frame, &thresholds, &Centroid, false);
    assert_eq!(centroid.left, Some(14.5));
    assert_eq!(centroid.right, Some(44.5));

    // 20 skin pixels per row: the running count passes 50 on the third row
    let topmost = estimate_hands(&frame, &thresholds, &TopmostThreshold::default(), false);
    assert_eq!(topmost.left, Some(12.0));
    assert_eq!(topmost.right, Some(42.0));
}

#[test]
fn test_mirror_swaps_paddle_assignment() {
    let frame = two_hand_frame((10, 20), (40, 50));
    let thresholds = SkinThresholds::default();

    let mirrored = estimate_hands(&frame, &thresholds, &LargestCluster, true);
    assert_eq!(mirrored.left, Some(44.5));
    assert_eq!(mirrored.right, Some(14.5));
}

#[test]
fn test_half_without_skin_is_undetected() {
    let mut frame = Frame::filled(80, 60, BACKDROP);
    frame.fill_rect(50, 30, 10, 10, SKIN);

    for kind in [
        EstimatorKind::Centroid,
        EstimatorKind::TopmostThreshold { threshold: 50 },
        EstimatorKind::LargestCluster,
    ] {
        let estimate = estimate_hands(&frame, &SkinThresholds::default(), &kind, false);
        assert_eq!(estimate.left, None, "{}", kind.label());
        assert!(estimate.right.is_some(), "{}", kind.label());
        assert_eq!(estimate.detected_count(), 1);
    }
}

#[test]
fn test_malformed_frame_detects_nothing() {
    let frame = Frame::new(vec![210; 7], 80, 60);
    let estimate = estimate_hands(&frame, &SkinThresholds::default(), &LargestCluster, false);
    assert_eq!(estimate, HandEstimate::none(0));
}

#[test]
fn test_absurd_dimensions_detect_nothing() {
    for (width, height) in [(u32::MAX, u32::MAX), (1 << 31, 1 << 31), (65536, 65536)] {
        let frame = Frame::new(Vec::new(), width, height);
        for kind in [
            EstimatorKind::Centroid,
            EstimatorKind::TopmostThreshold { threshold: 50 },
            EstimatorKind::LargestCluster,
        ] {
            let estimate = estimate_hands(&frame, &SkinThresholds::default(), &kind, true);
            assert_eq!(estimate, HandEstimate::none(0), "{width}x{height}");
        }
    }
}

#[test]
fn test_estimation_is_deterministic() {
    let frame = two_hand_frame((3, 9), (20, 58));
    let thresholds = SkinThresholds::default();
    let first = estimate_hands(&frame, &thresholds, &Centroid, true);
    let second = estimate_hands(&frame, &thresholds, &Centroid, true);
    assert_eq!(first, second);
}

#[test]
fn test_largest_cluster_ignores_smaller_noise() {
    // big hand in rows 30..45 and a small skin-toned patch near the top
    let mut frame = Frame::filled(80, 60, BACKDROP);
    frame.fill_rect(0, 2, 4, 3, SKIN);
    frame.fill_rect(5, 30, 25, 15, SKIN);

    let estimate = estimate_hands(&frame, &SkinThresholds::default(), &LargestCluster, false);
    assert_eq!(estimate.left, Some(37.0));
}
