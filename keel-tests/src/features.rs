use keel_core::{Dialect, Feature};

pub fn features<D: Dialect>(dialect: &D) {
    let features = dialect.features();
    for (name, feature) in Feature::all().iter_names() {
        assert_eq!(
            dialect.supports(feature),
            dialect.supports_named(name),
            "{}: `{}` answers differently by flag and by name",
            dialect.name(),
            name
        );
        assert_eq!(features.has(feature), dialect.supports(feature));
    }
    for unknown in ["", "time_travel", "cte ", "merge"] {
        assert!(
            !dialect.supports_named(unknown),
            "{}: unknown capability `{}` must be unsupported",
            dialect.name(),
            unknown
        );
    }
    assert_eq!(
        features
            .names()
            .filter_map(|v| Feature::by_name(&v))
            .collect::<Feature>(),
        features
    );

    // Quoting is fixed for the lifetime of the dialect
    let quote = dialect.ident_quote();
    assert_eq!(dialect.as_dyn().ident_quote(), quote);
    let mut out = String::new();
    dialect.write_identifier_quoted(&mut out, "user_profiles");
    assert_eq!(out, format!("{quote}user_profiles{quote}"));
    out.clear();
    dialect.write_identifier_quoted(&mut out, &format!("a{quote}b"));
    assert_eq!(out, format!("{quote}a{quote}{quote}b{quote}"));
    assert_eq!(dialect.ident_quote(), quote);
}
