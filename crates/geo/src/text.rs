//! Small text helpers shared by the formatting code.

/// Pads `input` on the left with `fill` until it is `width` characters long.
///
/// Input that is already `width` characters or longer is returned unchanged.
///
/// # Example
/// ```
/// use routeviz_geo::left_pad;
///
/// assert_eq!(left_pad("12", 3, '0'), "012");
/// assert_eq!(left_pad("1234", 3, '0'), "1234");
/// ```
pub fn left_pad(input: &str, width: usize, fill: char) -> String {
    let len = input.chars().count();
    if len >= width {
        return input.to_string();
    }

    let mut padded = String::with_capacity(width);
    for _ in 0..width - len {
        padded.push(fill);
    }
    padded.push_str(input);
    padded
}
