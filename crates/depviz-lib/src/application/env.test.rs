use super::*;

fn color_with(pairs: &[(&str, &str)]) -> ColorIntent {
    EnvironmentConfig::from_pairs(pairs.iter().copied())
        .unwrap()
        .apply_color_config(ColorIntent::Auto)
}

#[test]
fn test_no_environment_keeps_intent() {
    assert_eq!(color_with(&[]), ColorIntent::Auto);

    let env = EnvironmentConfig::default();
    assert_eq!(env.apply_color_config(ColorIntent::Always), ColorIntent::Always);
}

#[test]
fn test_no_color_environment_variable() {
    assert_eq!(color_with(&[("NO_COLOR", "1")]), ColorIntent::Never);
}

#[test]
fn test_force_color_environment_variable() {
    assert_eq!(color_with(&[("FORCE_COLOR", "1")]), ColorIntent::Always);
    assert_eq!(color_with(&[("FORCE_COLOR", "false")]), ColorIntent::Never);
}

#[test]
fn test_environment_variable_precedence() {
    // FORCE_COLOR=1 wins over NO_COLOR and CLICOLOR
    let color = color_with(&[("CLICOLOR", "0"), ("NO_COLOR", "1"), ("FORCE_COLOR", "1")]);
    assert_eq!(color, ColorIntent::Always);
}

#[test]
fn test_ci_environment_variable() {
    assert_eq!(color_with(&[("CI", "true")]), ColorIntent::Never);
    // CI short-circuits even FORCE_COLOR
    assert_eq!(
        color_with(&[("CI", "1"), ("FORCE_COLOR", "1")]),
        ColorIntent::Never
    );
}

#[test]
fn test_clicolor_only_disables_on_zero() {
    assert_eq!(color_with(&[("CLICOLOR", "0")]), ColorIntent::Never);
    assert_eq!(color_with(&[("CLICOLOR", "1")]), ColorIntent::Auto);
}

#[test]
fn test_empty_no_color_is_ignored() {
    assert_eq!(color_with(&[("NO_COLOR", "")]), ColorIntent::Auto);
}

#[test]
fn test_invalid_force_color_values_ignored() {
    assert_eq!(color_with(&[("FORCE_COLOR", "invalid")]), ColorIntent::Auto);
}

#[test]
fn test_unrelated_variables_are_ignored() {
    assert_eq!(
        color_with(&[("PATH", "/usr/bin"), ("TERM", "xterm")]),
        ColorIntent::Auto
    );
}
