//! Icon set generation.

use colornote_bundler::bundler::icon::{PlatformIcon, generate_icon_set, write_platform_icon};

#[tokio::test]
async fn every_requested_size_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let main = dir.path().join("assets/c0lornote_icon.png");

    let set = generate_icon_set(&main, 128, &[64, 16]).await.unwrap();

    assert_eq!(image::image_dimensions(&main).unwrap(), (128, 128));
    let sized: Vec<_> = set.sized.iter().map(|(size, _)| *size).collect();
    assert_eq!(sized, vec![64, 16]);
    for (size, path) in &set.sized {
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            format!("c0lornote_icon_{size}x{size}.png")
        );
        assert_eq!(image::image_dimensions(path).unwrap(), (*size, *size));
    }
}

#[tokio::test]
async fn rendered_icon_has_transparent_background() {
    let dir = tempfile::tempdir().unwrap();
    let main = dir.path().join("icon.png");
    generate_icon_set(&main, 64, &[]).await.unwrap();

    let icon = image::open(&main).unwrap().to_rgba8();
    assert_eq!(icon.get_pixel(0, 0)[3], 0);
    assert_eq!(icon.get_pixel(63, 63)[3], 0);
    assert!(icon.get_pixel(32, 32)[3] > 200, "notepad body is opaque");
}

#[tokio::test]
async fn zero_size_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    assert!(generate_icon_set(&dir.path().join("icon.png"), 0, &[]).await.is_err());
}

#[tokio::test]
async fn windows_icon_is_an_ico_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icon/icon.ico");

    write_platform_icon(&path, PlatformIcon::Ico).await.unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..4], &[0, 0, 1, 0]);
}
