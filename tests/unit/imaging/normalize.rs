//! Tests for raw array normalization, channel collapse and shape validation

#[cfg(test)]
mod tests {
    use ndarray::{Array, Array2, Array3, ArrayD, Axis, IxDyn, array};
    use statmeme::MemeError;
    use statmeme::imaging::normalize::{collapse_channels, normalize};

    // Tests rescaling puts the minimum at exactly 0 and the maximum at exactly 1
    // Verified by dividing by max instead of the range
    #[test]
    fn test_normalize_spans_unit_interval() {
        let raw = array![[2.0_f32, 4.0], [6.0, 10.0]].into_dyn();
        let image = normalize(raw.view()).unwrap();

        assert_eq!(image.shape(), (2, 2));
        assert_eq!(image.min_max(), Some((0.0, 1.0)));
        assert!((image.get(0, 1).unwrap() - 0.25).abs() < 1e-6);
        assert!((image.get(1, 0).unwrap() - 0.5).abs() < 1e-6);
    }

    // Tests negative and large ranges rescale the same way
    // Verified by clamping before rescaling
    #[test]
    fn test_normalize_arbitrary_range() {
        let raw = array![[-500.0_f32, 0.0, 1500.0]].into_dyn();
        let image = normalize(raw.view()).unwrap();

        assert_eq!(image.get(0, 0), Some(0.0));
        assert!((image.get(0, 1).unwrap() - 0.25).abs() < 1e-6);
        assert_eq!(image.get(0, 2), Some(1.0));
    }

    // Tests constant images become all zeros of the same shape
    // Verified by returning mid-grey for constant input
    #[test]
    fn test_constant_image_becomes_zeros() {
        let raw = Array2::<f32>::from_elem((3, 5), 0.7).into_dyn();
        let image = normalize(raw.view()).unwrap();

        assert_eq!(image.shape(), (3, 5));
        assert!(image.pixels().iter().all(|&v| v == 0.0));
    }

    // Tests a single-pixel image counts as constant
    // Verified by dividing by a zero range
    #[test]
    fn test_single_pixel_is_constant() {
        let raw = array![[42.0_f32]].into_dyn();
        let image = normalize(raw.view()).unwrap();

        assert_eq!(image.shape(), (1, 1));
        assert_eq!(image.get(0, 0), Some(0.0));
    }

    // Tests three-channel input matches normalizing its channel average
    // Verified by weighting the red channel more heavily
    #[test]
    fn test_channel_collapse_is_plain_average() {
        let rgb = Array3::from_shape_fn((4, 6, 3), |(r, c, ch)| {
            ((r * 7 + c * 3 + ch * 11) % 17) as f32
        });
        let averaged: Array2<f32> = rgb.mean_axis(Axis(2)).unwrap();

        let from_rgb = normalize(rgb.view().into_dyn()).unwrap();
        let from_gray = normalize(averaged.view().into_dyn()).unwrap();

        assert_eq!(from_rgb.shape(), from_gray.shape());
        for (a, b) in from_rgb.pixels().iter().zip(from_gray.pixels().iter()) {
            assert!((a - b).abs() < 1e-5, "{a} vs {b}");
        }
    }

    // Tests integer sample types are accepted
    // Verified by restricting normalize to floats
    #[test]
    fn test_u8_input() {
        let raw = array![[0_u8, 255], [51, 102]].into_dyn();
        let image = normalize(raw.view()).unwrap();

        assert_eq!(image.get(0, 1), Some(1.0));
        assert!((image.get(1, 0).unwrap() - 0.2).abs() < 1e-6);
    }

    // Tests NaN samples are ignored for the range and land on 0
    // Verified by letting NaN poison the minimum
    #[test]
    fn test_nan_samples_ignored() {
        let raw = array![[0.0_f32, f32::NAN], [2.0, 4.0]].into_dyn();
        let image = normalize(raw.view()).unwrap();

        assert_eq!(image.get(0, 1), Some(0.0));
        assert_eq!(image.get(1, 0), Some(0.5));
        assert_eq!(image.get(1, 1), Some(1.0));
    }

    // Tests ranks other than 2 and 3 fail and report the shape
    // Verified by accepting rank 4 as a batch
    #[test]
    fn test_invalid_rank_reports_shape() {
        let flat: ArrayD<f32> = Array::zeros(IxDyn(&[5]));
        match normalize(flat.view()) {
            Err(MemeError::InvalidShape { shape }) => assert_eq!(shape, vec![5]),
            other => panic!("expected InvalidShape, got {other:?}"),
        }

        let batch: ArrayD<f32> = Array::zeros(IxDyn(&[2, 3, 4, 5]));
        match normalize(batch.view()) {
            Err(MemeError::InvalidShape { shape }) => assert_eq!(shape, vec![2, 3, 4, 5]),
            other => panic!("expected InvalidShape, got {other:?}"),
        }
    }

    // Tests empty axes are rejected rather than producing an empty image
    // Verified by removing the zero-length check
    #[test]
    fn test_empty_axis_rejected() {
        let empty: ArrayD<f32> = Array::zeros(IxDyn(&[0, 4]));
        assert!(matches!(
            normalize(empty.view()),
            Err(MemeError::InvalidShape { .. })
        ));

        let no_channels: ArrayD<f32> = Array::zeros(IxDyn(&[2, 2, 0]));
        assert!(matches!(
            collapse_channels(no_channels.view()),
            Err(MemeError::InvalidShape { .. })
        ));
    }

    // Tests 2D input passes through channel collapse untouched
    // Verified by averaging along the column axis
    #[test]
    fn test_collapse_channels_passes_2d() {
        let raw = array![[1.0_f32, 2.0], [3.0, 4.0]].into_dyn();
        let gray = collapse_channels(raw.view()).unwrap();
        assert_eq!(gray, array![[1.0, 2.0], [3.0, 4.0]]);
    }
}
