//! End-to-end lint runs over hand-built source trees.

use lyre_lint::{format_results, format_summary, lint, Linter, LintConfig, OutputFormat};
use lyre_syntax::ast::{
    CaseArm, CaseExpr, Declaration, Expr, ExprKind, FunctionDecl, Lambda, Name, Pattern, Range,
    SourceFile,
};

fn function(name: &str, row: u32, args: Vec<Pattern>, body: Expr) -> Declaration {
    Declaration::Function(FunctionDecl {
        name: Name::new(name, Range::on_row(row, 1, 1 + name.len() as u32)),
        signature: None,
        args,
        body,
        range: Range::on_row(row, 1, 80),
    })
}

/// main = greet "world" ; greet name = name ; orphan _ignored = 1
fn sample_module() -> SourceFile {
    SourceFile::new(vec![
        function(
            "main",
            1,
            vec![],
            Expr::synthetic(ExprKind::Application(vec![
                Expr::value("greet"),
                Expr::synthetic(ExprKind::Literal(lyre_syntax::ast::Literal::Str(
                    "world".to_string(),
                ))),
            ])),
        ),
        function("greet", 3, vec![Pattern::var("name")], Expr::value("name")),
        function("orphan", 5, vec![Pattern::var("_ignored")], Expr::int(1)),
    ])
}

#[test]
fn reports_only_genuinely_unused_names() {
    let result = lint(&sample_module(), "", "Sample.lyre");

    // main and orphan are unreferenced at top level; _ignored is exempt.
    assert_eq!(result.warning_count, 2);
    let names: Vec<&str> = result
        .diagnostics
        .iter()
        .map(|d| d.message.as_str())
        .collect();
    assert!(names.iter().any(|m| m.contains("'main'")));
    assert!(names.iter().any(|m| m.contains("'orphan'")));
}

#[test]
fn exposed_names_are_exempt() {
    let config = LintConfig {
        exposed: vec!["main".to_string(), "orphan".to_string()],
        ..LintConfig::default()
    };
    let result = Linter::from_config(&config).lint_file(&sample_module(), "", "Sample.lyre");
    assert!(!result.has_diagnostics());
}

#[test]
fn unused_case_variable_reaches_output() {
    // f m = case m of whole -> 1
    let file = SourceFile::new(vec![function(
        "f",
        1,
        vec![Pattern::var("m")],
        Expr::synthetic(ExprKind::Case(CaseExpr {
            scrutinee: Box::new(Expr::value("m")),
            arms: vec![CaseArm {
                pattern: Pattern::new(
                    lyre_syntax::ast::PatternKind::Var("whole".into()),
                    Range::on_row(2, 3, 8),
                ),
                body: Expr::int(1),
            }],
        })),
    )]);

    let linter = Linter::new().with_enabled_rules(Some(vec![
        "lyre/no-unused-bindings".to_string(),
    ]));
    let result = linter.lint_file(&file, "", "Case.lyre");
    assert_eq!(result.warning_count, 1);

    let text = format_results(std::slice::from_ref(&result), OutputFormat::Text);
    assert!(text.contains("Case.lyre:2:3"));
    assert!(text.contains("'whole'"));
}

#[test]
fn shadowed_lambda_parameter_scenario() {
    // f = let x = 1 in (\x -> x) 2
    let file = SourceFile::new(vec![function(
        "f",
        1,
        vec![],
        Expr::synthetic(ExprKind::LetBlock(lyre_syntax::ast::LetBlock {
            declarations: vec![function("x", 1, vec![], Expr::int(1))],
            body: Box::new(Expr::synthetic(ExprKind::Application(vec![
                Expr::synthetic(ExprKind::Lambda(Lambda {
                    args: vec![Pattern::var("x")],
                    body: Box::new(Expr::value("x")),
                })),
                Expr::int(2),
            ]))),
        })),
    )]);

    let linter = Linter::new().with_enabled_rules(Some(vec![
        "lyre/no-unused-bindings".to_string(),
    ]));
    let result = linter.lint_file(&file, "", "Shadow.lyre");
    // The let-bound x is shadowed by the lambda parameter and never used.
    assert_eq!(result.warning_count, 1);
    assert!(result.diagnostics[0].message.contains("'x'"));
}

#[test]
fn json_output_and_summary() {
    let linter = Linter::new();
    let file = sample_module();
    let (results, summary) = linter.lint_files(&[(&file, "", "Sample.lyre")]);

    assert_eq!(summary.file_count, 1);
    assert_eq!(summary.warning_count, 2);
    assert_eq!(
        format_summary(summary.error_count, summary.warning_count, summary.file_count),
        "2 warnings in 1 file"
    );

    let json = format_results(&results, OutputFormat::Json);
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["file"], "Sample.lyre");
    assert_eq!(parsed[0]["warningCount"], 2);
    assert_eq!(parsed[0]["messages"][0]["severity"], 1);
}
