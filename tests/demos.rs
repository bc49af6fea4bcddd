use std::path::{Path, PathBuf};

use clap::Parser;
use report_flow::{Element, Layout, Policy};
use report_tool::cli::{
    self,
    opt::Options,
    script::{ReportScript, Substitutions},
    Job,
};

fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

fn subst() -> Substitutions {
    Substitutions {
        revision: String::from("0123abc"),
        generated: String::from("2024-03-01 09:30"),
    }
}

#[test]
fn summary_fits_one_page() {
    let mut script = ReportScript::load(&demo("summary.ron")).unwrap();
    assert_eq!(script.policy, Policy::Strict);
    subst().apply(&mut script.elements);

    let layout = Layout::from(script.layout);
    let doc = report_flow::layout(&script.elements, &layout, script.policy).unwrap();
    assert_eq!(doc.pages.len(), 1);

    let bytes = doc.to_bytes().unwrap();
    assert!(bytes.starts_with(b"%PDF-1.4\n"));
    assert!(bytes.ends_with(b"%%EOF\n"));
}

#[test]
fn walkthrough_paginates() {
    let mut script = ReportScript::load(&demo("walkthrough.ron")).unwrap();
    assert_eq!(script.policy, Policy::Paginate);
    subst().apply(&mut script.elements);
    assert_eq!(
        script.elements[1],
        Element::Subtitle(String::from(
            "Repository: addes4/productivity | Commit: 0123abc | Generated: 2024-03-01 09:30"
        ))
    );

    let layout = Layout::from(script.layout);
    let doc = report_flow::layout(&script.elements, &layout, Policy::Paginate).unwrap();
    let n = doc.pages.len();
    assert!(n >= 2);

    let bytes = doc.to_bytes().unwrap();
    let text = String::from_utf8_lossy(&bytes);
    let footer = format!("(Page {} of {}) Tj", n, n);
    assert!(text.contains(&footer));

    assert!(report_flow::layout(&script.elements, &layout, Policy::Strict).is_err());
}

fn options(file: &Path, out: &str, extra: &[&str]) -> Options {
    let mut args = vec!["report-tool", file.to_str().unwrap(), out];
    args.extend_from_slice(extra);
    Options::parse_from(args)
}

const SCRIPT: &str = r#"(
    output: Some("ignored.pdf"),
    policy: Paginate,
    elements: [
        Title("Report"),
        Subtitle("Commit: {revision} | Generated: {generated}"),
        Paragraph(text: "Body (with parens)"),
    ],
)"#;

#[test]
fn run_writes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("report.ron");
    std::fs::write(&file, SCRIPT).unwrap();
    let out = dir.path().join("nested").join("report.pdf");

    let opt = options(
        &file,
        out.to_str().unwrap(),
        &["--revision", "abc1234", "--generated", "2024-03-01 09:30"],
    );
    cli::run(opt).unwrap();

    let bytes = std::fs::read(&out).unwrap();
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("(Commit: abc1234 | Generated: 2024-03-01 09:30) Tj"));
    assert!(text.contains("(Body \\(with parens\\)) Tj"));
    assert!(!dir.path().join("ignored.pdf").exists());
}

#[test]
fn dash_goes_to_the_writer() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("report.ron");
    std::fs::write(&file, SCRIPT).unwrap();

    let opt = options(&file, "-", &["--strict", "--revision", "r1", "--generated", "now"]);
    let job = Job::load(&opt).unwrap();
    assert_eq!(job.out, PathBuf::from("-"));
    assert_eq!(job.policy, Policy::Strict);

    let mut buf = Vec::new();
    assert_eq!(job.write_to(&mut buf).unwrap(), 1);
    assert!(buf.starts_with(b"%PDF-1.4\n"));
    assert!(buf.ends_with(b"%%EOF\n"));
    assert!(std::fs::read_dir(dir.path()).unwrap().count() == 1);
}
