use super::*;
use crate::kinds::{FoldKind, SdfKind};

fn config(operations: Vec<FoldKind>, terminal: SdfKind) -> FractalConfig {
    FractalConfig::new("Test", operations, terminal).expect("valid name")
}

/// Lines strictly between the loop header and the loop's closing brace.
fn loop_body(sdf: &str) -> Vec<&str> {
    sdf.lines()
        .skip_while(|l| !l.contains("for (int i = 0; i < library.Iterations; i++) {"))
        .skip(1)
        .take_while(|l| *l != "\t}")
        .filter(|l| !l.trim().is_empty())
        .collect()
}

#[test]
fn codegen_full_sdf_fragment() {
    let out = generate(&config(
        vec![FoldKind::BoxFold, FoldKind::RotXFold, FoldKind::OrbitColoring],
        SdfKind::Torus,
    ))
    .expect("codegen failed");

    let expected = "float2 sdf(float3 p) {\n\
        \toutputColor = library.orbitInitInf();\n\
        \tfloat4 new_p = float4(p, 1.0f);\n\
        \tfloat d = 1e20;\n\
        \tfor (int i = 0; i < library.Iterations; i++) {\n\
        \t\tnew_p = library.boxFold(new_p, library.FoldSize);\n\
        \t\tnew_p = library.rotXFold(new_p, library.FoldAngles.x);\n\
        \t\toutputColor = library.orbitByType(outputColor, new_p);\n\
        \n\
        \t}\n\
        \treturn float2(min(d, library.sdTorus(new_p, float2(library.Offset, library.Offset))), length(new_p));\n\
        }\n";
    assert_eq!(out.sdf, expected);
    assert!(out.warnings.is_empty());
}

#[test]
fn codegen_driver_embeds_sdf_include() {
    let out = generate(&config(vec![], SdfKind::Mandelbrot)).expect("codegen failed");

    let expected = "#include \"/PluginShaders/SDFractalLibrary.ush\"\n\
        \n\
        struct SDF {\n\
        SDFractal library;\n\
        float3 outputColor;\n\
        \n\
        #include \"/PluginShaders/TestSDF.ush\"\n\
        };\n\
        \n\
        #include \"/PluginShaders/RayMarchingFractal.ush\"\n";
    assert_eq!(out.driver, expected);
}

#[test]
fn codegen_driver_follows_settings() {
    let settings = Settings {
        fragment_ext: "hlsl".into(),
        include_prefix: "/Shaders/".into(),
        ..Settings::default()
    };
    let out = generate_with(
        &config(vec![], SdfKind::Box),
        &settings,
        &CodegenOptions::default(),
    )
    .expect("codegen failed");

    assert!(out.driver.starts_with("#include \"/Shaders/SDFractalLibrary.hlsl\"\n"));
    assert!(out.driver.contains("#include \"/Shaders/TestSDF.hlsl\"\n"));
    assert!(out.driver.ends_with("#include \"/Shaders/RayMarchingFractal.hlsl\"\n"));
}

#[test]
fn codegen_preserves_operation_order() {
    let ops = vec![
        FoldKind::SphereFold,
        FoldKind::OrbitColoring,
        FoldKind::MengerFold,
        FoldKind::SphereFold,
        FoldKind::ScaleTranslateFold,
    ];
    let out = generate(&config(ops, SdfKind::Sphere)).expect("codegen failed");
    let body = loop_body(&out.sdf);

    assert_eq!(
        body,
        vec![
            "\t\tnew_p = library.sphereFold(new_p, 0.5, 1.0f);",
            "\t\toutputColor = library.orbitByType(outputColor, new_p);",
            "\t\tnew_p = library.mengerFold(new_p);",
            "\t\tnew_p = library.sphereFold(new_p, 0.5, 1.0f);",
            "\t\tnew_p = library.scaleTranslateFold(new_p, library.FoldingScale, library.Power * library.FoldOffset);",
        ]
    );
}

#[test]
fn codegen_one_statement_per_operation() {
    let ops: Vec<FoldKind> = FoldKind::ALL.iter().chain(FoldKind::ALL.iter()).copied().collect();
    let out = generate(&config(ops.clone(), SdfKind::Cone)).expect("codegen failed");
    assert_eq!(loop_body(&out.sdf).len(), ops.len());
}

#[test]
fn codegen_orbit_only_touches_color() {
    let out = generate(&config(vec![FoldKind::OrbitColoring], SdfKind::Box)).expect("codegen failed");
    let body = loop_body(&out.sdf);

    assert_eq!(body.len(), 1);
    assert!(body[0].trim_start().starts_with("outputColor = "));
    assert!(!body[0].contains("new_p ="));
}

#[test]
fn codegen_transforms_never_touch_color() {
    let ops: Vec<FoldKind> = FoldKind::ALL.into_iter().filter(|k| !k.is_orbit()).collect();
    let out = generate(&config(ops, SdfKind::Box)).expect("codegen failed");

    for line in loop_body(&out.sdf) {
        assert!(line.trim_start().starts_with("new_p = library."), "{line}");
        assert!(!line.contains("outputColor"), "{line}");
    }
}

#[test]
fn codegen_empty_chain_has_empty_loop() {
    let out = generate(&config(vec![], SdfKind::Julia)).expect("codegen failed");

    assert!(loop_body(&out.sdf).is_empty());
    assert!(out.sdf.contains("\tfloat d = 1e20;\n"));
    assert!(out.sdf.contains("\treturn library.sdJulia2(new_p, outputColor);\n"));
}

#[test]
fn codegen_is_deterministic() {
    let c = config(
        vec![FoldKind::AbsFold, FoldKind::RotZFold, FoldKind::OrbitColoring],
        SdfKind::InfCrossXY,
    );
    assert_eq!(generate(&c).unwrap(), generate(&c).unwrap());
}

#[test]
fn codegen_every_terminal() {
    for kind in SdfKind::ALL {
        let out = generate(&config(vec![FoldKind::BoxFold], kind)).expect("codegen failed");
        let expr = crate::catalog::sdf_return(kind).unwrap();
        assert!(out.sdf.contains(&format!("\treturn {expr};\n")), "{kind}");
    }
}

#[test]
fn codegen_lenient_emits_sentinel() {
    let out = generate(&config(
        vec![FoldKind::BoxFold, FoldKind::Unknown, FoldKind::MengerFold],
        SdfKind::Unknown,
    ))
    .expect("lenient codegen should not fail");

    assert_eq!(
        loop_body(&out.sdf),
        vec![
            "\t\tnew_p = library.boxFold(new_p, library.FoldSize);",
            "\t\tnew_p = Error;",
            "\t\tnew_p = library.mengerFold(new_p);",
        ]
    );
    assert!(out.sdf.contains("\treturn Error;\n"));
    assert_eq!(out.warnings.len(), 2);
    assert!(out.warnings[0].contains("operation 1"));
    assert!(out.warnings[1].contains("terminal"));
}

#[test]
fn codegen_strict_rejects_unknown() {
    let strict = CodegenOptions { strict: true };
    let err = generate_with(
        &config(vec![FoldKind::Unknown], SdfKind::Box),
        &Settings::default(),
        &strict,
    )
    .unwrap_err();
    assert!(matches!(err, FractalError::UnknownKind(_)));

    let err = generate_with(
        &config(vec![FoldKind::BoxFold], SdfKind::Unknown),
        &Settings::default(),
        &strict,
    )
    .unwrap_err();
    assert!(matches!(err, FractalError::UnknownKind(_)));
}
