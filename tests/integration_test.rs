use exam_grading::config::Config;
use exam_grading::logger;
use exam_grading::App;
use std::fs;
use std::path::Path;

fn config_in(dir: &Path, documents: &Path) -> Config {
    Config {
        documents_folder: documents.to_string_lossy().to_string(),
        report_path: dir.join("class_report.json").to_string_lossy().to_string(),
        warn_file: dir.join("warn.txt").to_string_lossy().to_string(),
        output_log_file: dir.join("output.txt").to_string_lossy().to_string(),
        max_concurrent_documents: 2,
        ..Config::default()
    }
}

#[tokio::test]
async fn test_grade_folder_end_to_end() {
    // 初始化日志
    logger::init();

    let dir = tempfile::tempdir().unwrap();
    let documents = dir.path().join("input_texts");
    fs::create_dir(&documents).unwrap();

    fs::write(
        documents.join("00_gabarito.pdf.txt"),
        "GABARITO OFICIAL\n1. A\n2. B\n3. C\n4. D\n5. E\n",
    )
    .unwrap();
    fs::write(
        documents.join("01_ana.jpg.txt"),
        "Nome: Ana Souza\nMatrícula: 1001\n1. A 2. B 3. C 4. D 5. E\n",
    )
    .unwrap();
    fs::write(
        documents.join("02_bruno.pdf.txt"),
        "Aluno: Bruno Lima\n1) A\n2) C\n3) C\n",
    )
    .unwrap();
    fs::write(documents.join("03_carla.txt"), "Estudante: Carla Dias\n1A2B3D4D5A\n").unwrap();

    let app = App::initialize(config_in(dir.path(), &documents)).await.unwrap();
    let report = app.run().await.unwrap().expect("应该生成报告");

    assert_eq!(report.students_count, 3);
    assert_eq!(report.total_questions, 5);

    let ranking: Vec<(&str, f64)> = report
        .statistics
        .ranking
        .iter()
        .map(|r| (r.student_name.as_str(), r.percentage))
        .collect();
    assert_eq!(
        ranking,
        vec![("Ana Souza", 100.0), ("Carla Dias", 60.0), ("Bruno Lima", 40.0)]
    );
    assert_eq!(report.statistics.ranking[0].student_id.as_deref(), Some("1001"));

    // 第 5 题：Bruno 未作答、Carla 答错
    assert_eq!(report.hardest_questions[0].question_number, 5);
    assert_eq!(report.hardest_questions[0].error_count, 2);

    let written = fs::read_to_string(dir.path().join("class_report.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["answer_key"]["1"], "A");
    assert_eq!(value["statistics"]["student_count"], 3);
}

#[tokio::test]
async fn test_submissions_without_key_fail() {
    logger::init();

    let dir = tempfile::tempdir().unwrap();
    let documents = dir.path().join("input_texts");
    fs::create_dir(&documents).unwrap();
    fs::write(documents.join("aluno.txt"), "Nome: Ana Souza\n1. A\n").unwrap();

    let app = App::initialize(config_in(dir.path(), &documents)).await.unwrap();
    let result = app.run().await;

    assert!(result.is_err(), "没有答案卡时应该报错");
}

#[tokio::test]
async fn test_empty_folder_produces_no_report() {
    logger::init();

    let dir = tempfile::tempdir().unwrap();
    let documents = dir.path().join("input_texts");
    fs::create_dir(&documents).unwrap();

    let app = App::initialize(config_in(dir.path(), &documents)).await.unwrap();
    assert!(app.run().await.unwrap().is_none());
    assert!(!dir.path().join("class_report.json").exists());
}
