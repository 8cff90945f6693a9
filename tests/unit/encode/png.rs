use std::path::PathBuf;

use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_png");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn probe_matches_compiled_features() {
    assert_eq!(probe_imaging().is_ok(), cfg!(feature = "png"));
}

#[cfg(feature = "png")]
#[test]
fn write_then_read_straightens_premultiplied_pixels() {
    let path = scratch("straighten.png");
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![66, 133, 244, 255, 128, 128, 128, 128],
        premultiplied: true,
    };
    write_png(&frame, &path).unwrap();

    let back = read_png(&path).unwrap();
    assert_eq!((back.width, back.height), (2, 1));
    assert!(!back.premultiplied);
    assert_eq!(back.pixel(0, 0), Some([66, 133, 244, 255]));
    assert_eq!(back.pixel(1, 0), Some([255, 255, 255, 128]));
}

#[cfg(feature = "png")]
#[test]
fn write_overwrites_existing_file() {
    let path = scratch("overwrite.png");
    std::fs::write(&path, b"not a png").unwrap();
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![0, 0, 0, 0],
        premultiplied: false,
    };
    write_png(&frame, &path).unwrap();
    assert_eq!(read_png(&path).unwrap().pixel(0, 0), Some([0, 0, 0, 0]));
}

#[cfg(feature = "png")]
#[test]
fn write_into_missing_directory_is_an_io_error() {
    let path = scratch("no_such_dir").join("x.png");
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![0, 0, 0, 0],
        premultiplied: false,
    };
    let err = write_png(&frame, &path).unwrap_err();
    assert!(matches!(err, IconError::Other(_)), "{err}");
}

#[cfg(not(feature = "png"))]
#[test]
fn write_without_png_support_is_missing_capability() {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![0, 0, 0, 0],
        premultiplied: false,
    };
    let err = write_png(&frame, &scratch("none.png")).unwrap_err();
    assert_eq!(err.as_missing_capability(), Some(&MissingCapability::png()));
}
