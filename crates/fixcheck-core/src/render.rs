use fixcheck_types::{AuditReceipt, AuditStatus, Diagnostic};

pub fn render_markdown_for_receipt(receipt: &AuditReceipt) -> String {
    let status = match receipt.verdict.status {
        AuditStatus::Pass => "PASS",
        AuditStatus::Warn => "WARN",
        AuditStatus::Fail => "FAIL",
    };

    let mut out = String::new();
    out.push_str(&format!("## fixcheck — {status}\n\n"));

    out.push_str(&format!(
        "Ran **{}** check(s) in `{}` mode, **{}** flagged\n\n",
        receipt.diagnostics.len(),
        receipt.mode.as_str(),
        receipt.verdict.counts.flagged()
    ));

    let flagged: Vec<&Diagnostic> = receipt
        .diagnostics
        .iter()
        .filter(|d| d.severity > 0)
        .collect();

    if flagged.is_empty() {
        out.push_str("No problems found.\n");
        return out;
    }

    out.push_str("| Band | Level | Problem | Repair |\n");
    out.push_str("|---|---|---|---|\n");

    for diagnostic in flagged {
        out.push_str(&render_diagnostic_row(diagnostic));
    }

    out.push('\n');
    out
}

fn render_diagnostic_row(diagnostic: &Diagnostic) -> String {
    format!(
        "| {band} | {level} | {problem} | {repair} |\n",
        band = diagnostic.band().as_str(),
        level = diagnostic.severity,
        problem = escape_md(&diagnostic.problem),
        repair = escape_md(&diagnostic.repair)
    )
}

fn escape_md(s: &str) -> String {
    s.replace('|', "\\|").replace('`', "\\`")
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixcheck_types::{
        AuditMode, DiagnosticCounts, ErrorKind, RunMeta, ToolMeta, Verdict, AUDIT_SCHEMA_V1,
    };

    fn receipt_with(diagnostics: Vec<Diagnostic>, status: AuditStatus) -> AuditReceipt {
        let mut counts = DiagnosticCounts::default();
        for d in &diagnostics {
            counts.bump(d.severity);
        }
        AuditReceipt {
            schema: AUDIT_SCHEMA_V1.to_string(),
            tool: ToolMeta {
                name: "fixcheck".to_string(),
                version: "0.1.0".to_string(),
            },
            mode: AuditMode::Repair,
            run: RunMeta {
                started_at: "2024-01-01T00:00:00+00:00".to_string(),
                ended_at: "2024-01-01T00:00:01+00:00".to_string(),
                duration_ms: 1000,
            },
            diagnostics,
            verdict: Verdict { status, counts },
        }
    }

    #[test]
    fn clean_receipt_renders_no_table() {
        let receipt = receipt_with(vec![Diagnostic::clean()], AuditStatus::Pass);
        let markdown = render_markdown_for_receipt(&receipt);
        assert!(markdown.contains("## fixcheck — PASS"));
        assert!(markdown.contains("No problems found."));
        assert!(!markdown.contains('|'));
    }

    #[test]
    fn pipes_and_backticks_are_escaped() {
        let receipt = receipt_with(
            vec![Diagnostic::flagged(ErrorKind::Generic, 30, "a|b `c`")],
            AuditStatus::Warn,
        );
        let markdown = render_markdown_for_receipt(&receipt);
        assert!(markdown.contains("a\\|b \\`c\\`"));
    }

    #[test]
    fn snapshot_markdown_with_mixed_severities() {
        let receipt = receipt_with(
            vec![
                Diagnostic::clean(),
                Diagnostic::flagged(ErrorKind::MissingField, 20, "no 'magic'")
                    .with_repair("added 'magic'"),
                Diagnostic::flagged(ErrorKind::Inconsistent, 40, "dims disagree"),
            ],
            AuditStatus::Fail,
        );
        let markdown = render_markdown_for_receipt(&receipt);
        insta::assert_snapshot!(markdown, @r"
## fixcheck — FAIL

Ran **3** check(s) in `repair` mode, **2** flagged

| Band | Level | Problem | Repair |
|---|---|---|---|
| fixable | 20 | no 'magic' | added 'magic' |
| error | 40 | dims disagree |  |
");
    }

    #[test]
    fn snapshot_json_receipt_pretty() {
        let receipt = receipt_with(
            vec![Diagnostic::flagged(ErrorKind::InvalidValue, 30, "bad datatype")],
            AuditStatus::Warn,
        );
        let json = serde_json::to_string_pretty(&receipt).expect("serialize receipt");
        insta::assert_snapshot!(json, @r#"
{
  "schema": "fixcheck.audit.v1",
  "tool": {
    "name": "fixcheck",
    "version": "0.1.0"
  },
  "mode": "repair",
  "run": {
    "started_at": "2024-01-01T00:00:00+00:00",
    "ended_at": "2024-01-01T00:00:01+00:00",
    "duration_ms": 1000
  },
  "diagnostics": [
    {
      "severity": 30,
      "problem": "bad datatype",
      "error_kind": "invalid_value"
    }
  ],
  "verdict": {
    "status": "warn",
    "counts": {
      "info": 0,
      "fixable": 0,
      "warning": 1,
      "error": 0
    }
  }
}
"#);
    }
}
