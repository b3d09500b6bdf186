use float_bits::{
    BF16, Error, FP4_E2M1, FP8_E4M3, FP8_E5M2, FP16, FP32, FP64, FloatFormat,
    SpecialValuePolicy, encode, info, lookup,
};
use indoc::indoc;

#[test]
fn lookup_finds_every_registered_key() {
    for key in ["fp32", "fp64", "fp16", "bf16", "fp8_e4m3", "fp8_e5m2", "fp4_e2m1"] {
        let format = lookup(key).unwrap();
        assert_eq!(format.key(), key);
    }
    assert_eq!(*lookup("bf16").unwrap(), BF16);
}

#[test]
fn lookup_rejects_unknown_keys() {
    for key in ["", "FP32", "fp8", "fp128", "fp8-e4m3"] {
        assert!(matches!(lookup(key), Err(Error::UnknownFormat(k)) if k == key));
    }
    assert_eq!(
        lookup("fp6_e3m2").unwrap_err().to_string(),
        "unknown float format: \"fp6_e3m2\""
    );
}

#[test]
fn parse_format_from_str() {
    let format: FloatFormat = "fp8_e5m2".parse().unwrap();
    assert_eq!(format, FP8_E5M2);
    assert!("half".parse::<FloatFormat>().is_err());
}

#[test]
fn registry_parameters() {
    #[rustfmt::skip]
    let expected = [
        ("fp32",     32,  8, 23,  127, SpecialValuePolicy::Standard),
        ("fp64",     64, 11, 52, 1023, SpecialValuePolicy::Standard),
        ("fp16",     16,  5, 10,   15, SpecialValuePolicy::Standard),
        ("bf16",     16,  8,  7,  127, SpecialValuePolicy::Standard),
        ("fp8_e4m3",  8,  4,  3,    7, SpecialValuePolicy::InfinityOnly),
        ("fp8_e5m2",  8,  5,  2,   15, SpecialValuePolicy::Standard),
        ("fp4_e2m1",  4,  2,  1,    1, SpecialValuePolicy::NoSpecialValues),
    ];
    assert_eq!(FloatFormat::ALL.len(), expected.len());
    for (format, (key, total, exp, mant, bias, policy)) in
        FloatFormat::ALL.iter().zip(expected)
    {
        assert_eq!(format.key(), key);
        assert_eq!(format.total_bits(), total);
        assert_eq!(format.sign_bits(), 1);
        assert_eq!(format.exponent_bits(), exp);
        assert_eq!(format.mantissa_bits(), mant);
        assert_eq!(format.exponent_bias(), bias);
        assert_eq!(format.policy(), policy);
    }
}

#[test]
fn policy_capabilities() {
    assert!(FP16.policy().has_infinity() && FP16.policy().has_nan());
    assert!(FP8_E4M3.policy().has_infinity() && !FP8_E4M3.policy().has_nan());
    assert!(!FP4_E2M1.policy().has_infinity() && !FP4_E2M1.policy().has_nan());
}

#[test]
fn format_display() {
    assert_eq!(FP32.to_string(), "FP32 (Single Precision): 1+8+23 bits, bias 127");
    assert_eq!(FP4_E2M1.to_string(), "FP4 E2M1: 1+2+1 bits, bias 1");
}

// ───────────────────────────────── Format info ──────────────────────────────

#[test]
fn info_matches_native_types() {
    let i = info(&FP32);
    assert_eq!(i.max_positive_normal, f32::MAX as f64);
    assert_eq!(i.min_positive_subnormal, f32::from_bits(1) as f64);
    assert_eq!(i.epsilon, f32::EPSILON as f64);
    assert_eq!((i.min_normal_exponent, i.max_normal_exponent), (-126, 127));

    let i = info(&FP64);
    assert_eq!(i.max_positive_normal, f64::MAX);
    assert_eq!(i.min_positive_subnormal, f64::from_bits(1));
    assert_eq!(i.epsilon, f64::EPSILON);
    assert_eq!((i.min_normal_exponent, i.max_normal_exponent), (-1022, 1023));
}

#[test]
fn info_for_narrow_formats() {
    let i = info(&FP16);
    assert_eq!(i.max_positive_normal, 65504.0);
    assert_eq!(i.min_positive_subnormal, 2f64.powi(-24));
    assert_eq!(i.epsilon, 2f64.powi(-10));

    let i = info(&BF16);
    assert_eq!(i.max_positive_normal, (2.0 - 2f64.powi(-7)) * 2f64.powi(127));
    assert_eq!(i.min_positive_subnormal, 2f64.powi(-133));

    let i = info(&FP8_E5M2);
    assert_eq!(i.max_positive_normal, 57344.0);
    assert_eq!(i.min_positive_subnormal, 2f64.powi(-16));
}

#[test]
fn info_uses_ieee_range_for_extended_formats() {
    // The reported maximum ignores the all-ones exponent that these formats
    // actually use, so the encoder reaches past it.
    let i = info(&FP8_E4M3);
    assert_eq!(i.max_normal_exponent, 7);
    assert_eq!(i.max_positive_normal, 240.0);
    assert_eq!(encode(f64::MAX, &FP8_E4M3).to_bits(), 0x7F);
    assert_eq!(encode(f64::MAX, &FP8_E4M3).value(), 480.0);

    let i = info(&FP4_E2M1);
    assert_eq!((i.min_normal_exponent, i.max_normal_exponent), (0, 1));
    assert_eq!(i.max_positive_normal, 3.0);
    assert_eq!(i.min_positive_subnormal, 0.5);
    assert_eq!(i.epsilon, 0.5);
    assert_eq!(encode(f64::MAX, &FP4_E2M1).value(), 6.0);
}

#[test]
fn info_display() {
    assert_eq!(
        info(&FP16).to_string(),
        indoc! {"
            min subnormal: 5.9605e-8
            max normal:    6.5504e4
            epsilon:       9.7656e-4
            exponent:      -14..=15"}
    );
    assert_eq!(
        info(&FP4_E2M1).to_string(),
        indoc! {"
            min subnormal: 5.0000e-1
            max normal:    3.0000e0
            epsilon:       5.0000e-1
            exponent:      0..=1"}
    );
}
