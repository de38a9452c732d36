use crate::error::{Error, Result};

use super::{Cmy, Rgb};

/// Mixes colors the way paints mix.
///
/// Every input is converted to CMY, channels are summed across all inputs and
/// each sum is capped at `1.0` before converting back. Adding paint can only
/// absorb more light, so the result is never lighter than any input and tends
/// to black as more pigment goes in. The result does not depend on input order.
///
/// # Errors
/// [`Error::EmptyColorSet`] if `colors` is empty.
pub fn mix_colors(colors: &[Rgb]) -> Result<Rgb> {
    if colors.is_empty() {
        log::warn!("mix_colors called with no colors");
        return Err(Error::EmptyColorSet);
    }

    let sum = colors
        .iter()
        .map(|&rgb| Cmy::from_rgb(rgb))
        .fold(Cmy::default(), |acc, cmy| {
            Cmy::new(acc.c + cmy.c, acc.m + cmy.m, acc.y + cmy.y)
        });

    // Inputs are non-negative, only the upper bound can be exceeded.
    let mixed = Cmy::new(sum.c.min(1.0), sum.m.min(1.0), sum.y.min(1.0));
    Ok(mixed.to_rgb())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn darkness(rgb: Rgb) -> u32 {
        (255 - rgb.r as u32) + (255 - rgb.g as u32) + (255 - rgb.b as u32)
    }

    #[test]
    fn empty_is_an_error() {
        assert!(matches!(mix_colors(&[]), Err(Error::EmptyColorSet)));
    }

    #[test]
    fn single_color_is_unchanged() {
        let c = Rgb::new(12, 200, 99);
        assert_eq!(mix_colors(&[c]).unwrap(), c);
    }

    #[test]
    fn red_green_blue_make_black() {
        let out = mix_colors(&[Rgb::RED, Rgb::GREEN, Rgb::BLUE]).unwrap();
        assert_eq!(out, Rgb::BLACK);
    }

    #[test]
    fn cyan_and_yellow_make_green() {
        let out = mix_colors(&[Rgb::CYAN, Rgb::YELLOW]).unwrap();
        assert_eq!(out, Rgb::GREEN);
    }

    #[test]
    fn white_is_neutral() {
        let c = Rgb::new(40, 90, 160);
        assert_eq!(mix_colors(&[c, Rgb::WHITE]).unwrap(), c);
    }

    #[test]
    fn order_does_not_matter() {
        let colors = [
            Rgb::new(250, 10, 30),
            Rgb::new(200, 200, 255),
            Rgb::new(230, 240, 100),
            Rgb::new(255, 255, 254),
        ];
        let expected = mix_colors(&colors).unwrap();

        let permutations: [[usize; 4]; 6] = [
            [3, 2, 1, 0],
            [1, 0, 3, 2],
            [2, 3, 0, 1],
            [0, 2, 1, 3],
            [3, 0, 2, 1],
            [1, 3, 2, 0],
        ];
        for perm in permutations {
            let shuffled: Vec<Rgb> = perm.iter().map(|&i| colors[i]).collect();
            assert_eq!(mix_colors(&shuffled).unwrap(), expected, "{perm:?}");
        }
    }

    #[test]
    fn repeated_inclusion_never_lightens() {
        let c = Rgb::new(180, 220, 120);
        let once = mix_colors(&[c]).unwrap();
        let mut prev = once;
        for n in 2..6 {
            let many = vec![c; n];
            let out = mix_colors(&many).unwrap();
            assert!(out.r <= prev.r && out.g <= prev.g && out.b <= prev.b);
            assert!(darkness(out) >= darkness(once));
            prev = out;
        }
    }
}
