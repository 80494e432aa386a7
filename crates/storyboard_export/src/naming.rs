//! File names inside and of the archive.

/// Image entry name for a scene number.
///
/// Numbers are zero-padded to three digits; larger numbers keep their
/// natural width.
///
/// # Examples
///
/// ```
/// use storyboard_export::image_file_name;
///
/// assert_eq!(image_file_name(7), "scene_007.png");
/// assert_eq!(image_file_name(1000), "scene_1000.png");
/// ```
pub fn image_file_name(scene_number: u32) -> String {
    format!("scene_{:03}.png", scene_number)
}

/// Archive file name for a project name.
///
/// # Examples
///
/// ```
/// use storyboard_export::archive_file_name;
///
/// assert_eq!(archive_file_name("Leo's Big Day!"), "leo_s_big_day__assets.zip");
/// ```
pub fn archive_file_name(project_name: &str) -> String {
    let slug: String = project_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}_assets.zip", slug)
}
