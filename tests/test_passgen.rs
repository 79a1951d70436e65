use passmith::charset::{CharClass, ClassToggles};
use passmith::passgen::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_config() {
        let mut generator = Generator::new();
        let password = generator.generate(&GenerationConfig::default()).unwrap();
        assert_eq!(password.chars().count(), 16);
    }

    #[test]
    fn test_generate_exact_length() {
        let mut generator = Generator::new();
        for length in [8, 12, 24, 40, 64] {
            let config = GenerationConfig {
                length,
                ..Default::default()
            };
            let password = generator.generate(&config).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn test_length_below_minimum_is_clamped_up() {
        let mut generator = Generator::new();
        let config = GenerationConfig {
            length: 3,
            ..Default::default()
        };
        let password = generator.generate(&config).unwrap();
        assert_eq!(password.chars().count(), MIN_LENGTH);
    }

    #[test]
    fn test_length_above_maximum_is_clamped_down() {
        let mut generator = Generator::new();
        let config = GenerationConfig {
            length: 500,
            ..Default::default()
        };
        let password = generator.generate(&config).unwrap();
        assert_eq!(password.chars().count(), MAX_LENGTH);
    }

    #[test]
    fn test_output_drawn_from_enabled_union() {
        let mut generator = Generator::new();
        let mut classes = ClassToggles::none();
        classes.set(CharClass::Lowercase, true);
        classes.set(CharClass::Numbers, true);
        let config = GenerationConfig {
            length: 32,
            classes,
            enforce_coverage: false,
        };
        let union = format!(
            "{}{}",
            CharClass::Lowercase.alphabet(),
            CharClass::Numbers.alphabet()
        );
        for _ in 0..10 {
            let password = generator.generate(&config).unwrap();
            assert!(password.chars().all(|c| union.contains(c)));
        }
    }

    #[test]
    fn test_coverage_enforced_for_all_classes() {
        let mut generator = Generator::new();
        // Length 8 with four classes leaves plenty of room for coverage.
        let config = GenerationConfig {
            length: 8,
            classes: ClassToggles::default(),
            enforce_coverage: true,
        };
        for _ in 0..20 {
            let password = generator.generate(&config).unwrap();
            assert!(covers_all_classes(&password, config.classes));
        }
    }

    #[test]
    fn test_empty_classes_yield_empty_alphabet_error() {
        let mut generator = Generator::new();
        let config = GenerationConfig {
            length: 12,
            classes: ClassToggles::none(),
            enforce_coverage: true,
        };
        let result = generator.generate(&config);
        assert!(matches!(result, Err(GenError::EmptyAlphabet(_))));
    }

    #[test]
    fn test_single_class_output() {
        let mut generator = Generator::new();
        let config = GenerationConfig {
            length: 8,
            classes: ClassToggles::only(CharClass::Lowercase),
            enforce_coverage: true,
        };
        let password = generator.generate(&config).unwrap();
        assert_eq!(password.chars().count(), 8);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    /// Always draws index 0, so every candidate is the alphabet's first
    /// character repeated.
    struct ZeroRng;

    impl rand::RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn test_coverage_budget_exhaustion_fails() {
        // Every candidate comes out "AAAAAAAA", so lowercase, numbers and
        // symbols can never be covered and the retry budget runs out.
        let mut generator = Generator::with_rng(ZeroRng);
        let config = GenerationConfig {
            length: 8,
            classes: ClassToggles::default(),
            enforce_coverage: true,
        };
        let result = generator.generate(&config);
        assert!(matches!(
            result,
            Err(GenError::GenerationFailed(MAX_COVERAGE_ATTEMPTS))
        ));
    }

    #[test]
    fn test_constant_rng_single_class_succeeds() {
        // With one enabled class the constant draw still satisfies
        // coverage, so generation succeeds deterministically.
        let mut generator = Generator::with_rng(ZeroRng);
        let config = GenerationConfig {
            length: 8,
            classes: ClassToggles::only(CharClass::Lowercase),
            enforce_coverage: true,
        };
        let password = generator.generate(&config).unwrap();
        assert_eq!(password, "aaaaaaaa");
    }

    #[test]
    fn test_covers_all_classes_helper() {
        assert!(covers_all_classes("Aa1!", ClassToggles::default()));
        assert!(!covers_all_classes("aa11", ClassToggles::default()));
        assert!(covers_all_classes(
            "aaaa",
            ClassToggles::only(CharClass::Lowercase)
        ));
    }
}
