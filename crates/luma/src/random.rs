use rand::Rng;

use crate::Color;

/// Draws an opaque color with r, g and b uniform in `[0.0, 1.0)`.
///
/// Channels are drawn in r, g, b order, so a seeded `rng` reproduces the
/// same sequence of colors.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    let r = rng.gen::<f64>();
    let g = rng.gen::<f64>();
    let b = rng.gen::<f64>();
    Color::rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn thousand_colors_are_opaque_and_in_range() {
        let mut rng = rand::thread_rng();
        let colors: Vec<_> = (0..1000).map(|_| random_color(&mut rng)).collect();

        for color in &colors {
            for c in [color.r, color.g, color.b] {
                assert!((0.0..1.0).contains(&c), "{color:?}");
            }
            assert_eq!(color.a, 1.0);
        }

        assert!(colors.iter().any(|c| *c != colors[0]));
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let a: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..16).map(|_| random_color(&mut rng)).collect()
        };
        let b: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..16).map(|_| random_color(&mut rng)).collect()
        };
        assert_eq!(a, b);

        let mut other = StdRng::seed_from_u64(8);
        assert_ne!(a[0], random_color(&mut other));
    }

    #[test]
    fn accepts_trait_object() {
        let mut rng = StdRng::seed_from_u64(1);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        let color = random_color(dyn_rng);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn ambient_source() {
        let color = Color::random();
        assert!((0.0..1.0).contains(&color.r));
        assert_eq!(color.a, 1.0);
    }
}
