//! Structural verification of the emitted JPEG byte stream.
//!
//! These tests walk the marker segments of real encoder output and check
//! them against the baseline interchange format rules, independent of any
//! decoder.

use basejpeg::consts::{
    AC_CHROMINANCE_BITS, AC_CHROMINANCE_VALUES, AC_LUMINANCE_BITS, AC_LUMINANCE_VALUES,
    DC_CHROMINANCE_BITS, DC_CHROMINANCE_VALUES, DC_LUMINANCE_BITS, DC_LUMINANCE_VALUES,
    JPEG_NATURAL_ORDER,
};
use basejpeg::quant::QuantTables;
use basejpeg::Encoder;

#[test]
fn test_segment_order() {
    let jpeg = sample_jpeg(75, false);
    let (segments, _) = collect_segments(&jpeg);

    let markers: Vec<u8> = segments.iter().map(|(m, _)| *m).collect();
    assert_eq!(markers, [0xC0, 0xDB, 0xC4, 0xDA]);
}

#[test]
fn test_segment_order_with_app0() {
    let jpeg = sample_jpeg(75, true);
    let (segments, _) = collect_segments(&jpeg);

    let markers: Vec<u8> = segments.iter().map(|(m, _)| *m).collect();
    assert_eq!(markers, [0xE0, 0xC0, 0xDB, 0xC4, 0xDA]);
}

/// SOF0: 8-bit precision, height before width, 4:2:0 component layout.
#[test]
fn test_sof0_frame_header() {
    let width = 300u32;
    let height = 200u32;
    let rgb = noise_image((width * height * 3) as usize);
    let jpeg = Encoder::new()
        .quality(75)
        .encode_rgb(&rgb, width, height)
        .unwrap();

    let (segments, _) = collect_segments(&jpeg);
    let sof0 = &segments.iter().find(|(m, _)| *m == 0xC0).unwrap().1;

    assert_eq!(sof0.len(), 15);
    assert_eq!(sof0[0], 8, "sample precision");
    assert_eq!(&sof0[1..3], &[0x00, 0xC8], "height = 200");
    assert_eq!(&sof0[3..5], &[0x01, 0x2C], "width = 300");
    assert_eq!(sof0[5], 3, "component count");

    // (id, sampling, quant table): Y 2x2/0, Cb 1x1/1, Cr 1x1/1
    assert_eq!(&sof0[6..9], &[1, 0x22, 0]);
    assert_eq!(&sof0[9..12], &[2, 0x11, 1]);
    assert_eq!(&sof0[12..15], &[3, 0x11, 1]);
}

/// DQT carries both tables in one segment, zigzag order, matching the
/// tables the quality setting derives.
#[test]
fn test_dqt_matches_quality_tables() {
    for quality in [25u8, 50, 85] {
        let jpeg = sample_jpeg(quality, false);
        let (segments, _) = collect_segments(&jpeg);
        let dqt = &segments.iter().find(|(m, _)| *m == 0xDB).unwrap().1;

        assert_eq!(dqt.len(), 2 * 65);
        assert_eq!(dqt[0], 0x00, "luma table id");
        assert_eq!(dqt[65], 0x01, "chroma table id");

        let tables = QuantTables::build(quality);
        for i in 0..64 {
            assert_eq!(
                dqt[1 + i],
                tables.table_by_id(0)[JPEG_NATURAL_ORDER[i]],
                "q{} luma entry {}",
                quality,
                i
            );
            assert_eq!(
                dqt[66 + i],
                tables.table_by_id(1)[JPEG_NATURAL_ORDER[i]],
                "q{} chroma entry {}",
                quality,
                i
            );
        }
    }
}

/// DHT carries the four standard tables in one segment.
#[test]
fn test_dht_standard_tables() {
    let jpeg = sample_jpeg(75, false);
    let (segments, _) = collect_segments(&jpeg);
    let dht = &segments.iter().find(|(m, _)| *m == 0xC4).unwrap().1;

    let expected: [(u8, &[u8], &[u8]); 4] = [
        (0x00, &DC_LUMINANCE_BITS, &DC_LUMINANCE_VALUES),
        (0x10, &AC_LUMINANCE_BITS, &AC_LUMINANCE_VALUES),
        (0x01, &DC_CHROMINANCE_BITS, &DC_CHROMINANCE_VALUES),
        (0x11, &AC_CHROMINANCE_BITS, &AC_CHROMINANCE_VALUES),
    ];

    let mut pos = 0;
    for (class_id, bits, values) in expected {
        assert_eq!(dht[pos], class_id, "table class/destination");
        let counts = &dht[pos + 1..pos + 17];
        assert_eq!(counts, &bits[1..], "code counts for table {:02x}", class_id);

        let total: usize = counts.iter().map(|&c| c as usize).sum();
        assert_eq!(total, values.len());
        assert_eq!(
            &dht[pos + 17..pos + 17 + total],
            values,
            "symbol values for table {:02x}",
            class_id
        );
        pos += 17 + total;
    }
    assert_eq!(pos, dht.len(), "trailing bytes in DHT segment");
}

/// SOS: three components referencing the expected Huffman tables, full
/// spectral range, no successive approximation.
#[test]
fn test_sos_scan_header() {
    let jpeg = sample_jpeg(75, false);
    let (segments, _) = collect_segments(&jpeg);
    let (marker, sos) = segments.last().unwrap();

    assert_eq!(*marker, 0xDA);
    assert_eq!(sos[..], [3, 1, 0x00, 2, 0x11, 3, 0x11, 0, 63, 0]);
}

/// Every 0xFF inside the entropy-coded segment must be stuffed with 0x00.
#[test]
fn test_scan_data_byte_stuffing() {
    for quality in [5u8, 75, 100] {
        let jpeg = sample_jpeg(quality, false);
        let (_, scan_start) = collect_segments(&jpeg);

        assert_eq!(&jpeg[jpeg.len() - 2..], [0xFF, 0xD9], "missing EOI");
        let scan = &jpeg[scan_start..jpeg.len() - 2];
        assert!(!scan.is_empty());

        for (i, pair) in scan.windows(2).enumerate() {
            if pair[0] == 0xFF {
                assert_eq!(
                    pair[1],
                    0x00,
                    "q{}: unstuffed 0xFF at scan offset {}",
                    quality,
                    i
                );
            }
        }
        assert_ne!(scan[scan.len() - 1], 0xFF, "scan ends in a bare 0xFF");
    }
}

// Helper functions

/// Marker byte and payload (length bytes stripped) for each segment from
/// SOI through SOS, plus the offset where entropy-coded data begins.
fn collect_segments(jpeg: &[u8]) -> (Vec<(u8, Vec<u8>)>, usize) {
    assert_eq!(&jpeg[..2], [0xFF, 0xD8], "missing SOI");
    let mut segments = Vec::new();
    let mut pos = 2;
    loop {
        assert_eq!(jpeg[pos], 0xFF, "expected a marker at offset {}", pos);
        let marker = jpeg[pos + 1];
        let len = usize::from(jpeg[pos + 2]) << 8 | usize::from(jpeg[pos + 3]);
        assert!(len >= 2, "undersized segment at offset {}", pos);
        segments.push((marker, jpeg[pos + 4..pos + 2 + len].to_vec()));
        pos += 2 + len;
        if marker == 0xDA {
            break;
        }
    }
    (segments, pos)
}

fn sample_jpeg(quality: u8, jfif: bool) -> Vec<u8> {
    let width = 32u32;
    let height = 24u32;
    let rgb = noise_image((width * height * 3) as usize);
    Encoder::new()
        .quality(quality)
        .jfif(jfif)
        .encode_rgb(&rgb, width, height)
        .unwrap()
}

fn noise_image(len: usize) -> Vec<u8> {
    let mut state = 0x6D2B79F5u32;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            (state >> 24) as u8
        })
        .collect()
}
