//! pom.xml check E2E tests

mod helper;

use boot_version_check::check::check_pom;
use boot_version_check::reconcile::MismatchRecord;
use boot_version_check::reference::ReferenceCache;
use boot_version_check::report::{OutputFormat, ReportMode};

use helper::{MockSource, TestProject, cache_file, create_test_cache};

const PARENT_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
    <modelVersion>4.0.0</modelVersion>
    <parent>
        <groupId>org.springframework.boot</groupId>
        <artifactId>spring-boot-starter-parent</artifactId>
        <version>2.4.0</version>
    </parent>
    <groupId>com.example</groupId>
    <artifactId>demo-parent</artifactId>
    <properties>
        <java.version>11</java.version>
        <spring-kafka.version>2.6.0</spring-kafka.version>
    </properties>
    <modules>
        <module>service</module>
    </modules>
</project>"#;

const SERVICE_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
    <modelVersion>4.0.0</modelVersion>
    <artifactId>service</artifactId>
    <dependencies>
        <dependency>
            <groupId>org.springframework.kafka</groupId>
            <artifactId>spring-kafka</artifactId>
            <version>${spring-kafka.version}</version>
        </dependency>
        <dependency>
            <groupId>com.fasterxml.jackson.core</groupId>
            <artifactId>jackson-databind</artifactId>
            <version>2.11.0</version>
        </dependency>
        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter-web</artifactId>
        </dependency>
    </dependencies>
</project>"#;

fn spring_boot_2_4() -> MockSource {
    MockSource::new()
        .with_dependencies(
            "2.4.0",
            &[
                ("org.springframework.kafka", "spring-kafka", "2.6.3"),
                ("com.fasterxml.jackson.core", "jackson-databind", "2.11.3"),
                ("org.springframework.boot", "spring-boot-starter-web", "2.4.0"),
            ],
        )
        .with_properties("2.4.0", &["jackson-bom.version", "spring-kafka.version"])
}

#[tokio::test]
async fn reports_managed_packages_and_properties_across_modules() {
    let project = TestProject::new()
        .with_file("pom.xml", PARENT_POM)
        .with_file("service/pom.xml", SERVICE_POM);
    let (_temp_dir, cache) = create_test_cache(spring_boot_2_4());

    let report = check_pom(project.root(), "pom.xml", &cache).await;

    assert_eq!(report.mode, ReportMode::Pom);
    assert_eq!(report.spring_boot_version.as_deref(), Some("2.4.0"));
    assert_eq!(
        report.packages,
        vec![
            MismatchRecord::new(
                "org.springframework.kafka",
                "spring-kafka",
                Some("2.6.0"),
                "2.6.3"
            ),
            MismatchRecord::new(
                "com.fasterxml.jackson.core",
                "jackson-databind",
                Some("2.11.0"),
                "2.11.3"
            ),
        ]
    );
    assert_eq!(report.properties, vec!["spring-kafka.version".to_string()]);
}

#[tokio::test]
async fn second_run_reads_reference_tables_from_cache() {
    let project = TestProject::new()
        .with_file("pom.xml", PARENT_POM)
        .with_file("service/pom.xml", SERVICE_POM);
    let (temp_dir, cache) = create_test_cache(spring_boot_2_4());

    let first = check_pom(project.root(), "pom.xml", &cache).await;
    let second = check_pom(project.root(), "pom.xml", &cache).await;

    assert_eq!(first, second);
    assert_eq!(cache.source().dependency_fetches(), 1);
    assert_eq!(cache.source().property_fetches(), 1);
    assert!(cache_file(&temp_dir, "dependencies_2.4.0.json").is_file());
    assert!(cache_file(&temp_dir, "properties_2.4.0.json").is_file());
}

#[tokio::test]
async fn project_without_spring_boot_never_fetches() {
    let project = TestProject::new().with_file("pom.xml", SERVICE_POM);
    let (temp_dir, cache) = create_test_cache(spring_boot_2_4());

    let report = check_pom(project.root(), "pom.xml", &cache).await;

    assert_eq!(report.spring_boot_version, None);
    assert!(report.is_empty());
    assert_eq!(cache.source().dependency_fetches(), 0);
    assert_eq!(cache.source().property_fetches(), 0);
    assert!(!cache_file(&temp_dir, "dependencies_2.4.0.json").exists());
}

#[tokio::test]
async fn unpublished_release_is_cached_as_empty() {
    let project = TestProject::new().with_file(
        "pom.xml",
        &PARENT_POM.replace("<version>2.4.0</version>", "<version>9.9.9</version>"),
    );
    let (temp_dir, cache) = create_test_cache(spring_boot_2_4());

    let report = check_pom(project.root(), "pom.xml", &cache).await;
    check_pom(project.root(), "pom.xml", &cache).await;

    assert_eq!(report.spring_boot_version.as_deref(), Some("9.9.9"));
    assert!(report.is_empty());
    assert_eq!(cache.source().dependency_fetches(), 1);
    assert_eq!(
        std::fs::read_to_string(cache_file(&temp_dir, "dependencies_9.9.9.json")).unwrap(),
        "[]"
    );
}

#[tokio::test]
async fn malformed_module_discards_whole_project() {
    let project = TestProject::new()
        .with_file("pom.xml", PARENT_POM)
        .with_file("broken/pom.xml", "<project><dependencies></project>");
    let (_temp_dir, cache) = create_test_cache(spring_boot_2_4());

    let report = check_pom(project.root(), "pom.xml", &cache).await;

    assert_eq!(report.spring_boot_version, None);
    assert!(report.is_empty());
}

#[tokio::test]
async fn custom_suffix_selects_matching_files_only() {
    let project = TestProject::new()
        .with_file("pom.xml", SERVICE_POM)
        .with_file("release-pom.xml", PARENT_POM);
    let (_temp_dir, cache) = create_test_cache(spring_boot_2_4());

    let report = check_pom(project.root(), "release-pom.xml", &cache).await;

    assert_eq!(report.spring_boot_version.as_deref(), Some("2.4.0"));
    assert!(report.packages.is_empty());
    assert_eq!(report.properties, vec!["spring-kafka.version".to_string()]);
}

#[tokio::test]
async fn json_output_lists_records() {
    let project = TestProject::new()
        .with_file("pom.xml", PARENT_POM)
        .with_file("service/pom.xml", SERVICE_POM);
    let (_temp_dir, cache) = create_test_cache(spring_boot_2_4());

    let report = check_pom(project.root(), "pom.xml", &cache).await;
    let json: serde_json::Value =
        serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();

    assert_eq!(json["mode"], "pom");
    assert_eq!(json["springBootVersion"], "2.4.0");
    assert_eq!(json["packages"][0]["inputFileVersion"], "2.6.0");
    assert_eq!(json["packages"][0]["bootVersion"], "2.6.3");
    assert_eq!(json["properties"][0], "spring-kafka.version");
}

#[tokio::test]
async fn property_declared_by_two_modules_is_listed_twice() {
    let project = TestProject::new()
        .with_file("pom.xml", PARENT_POM)
        .with_file(
            "service/pom.xml",
            r#"<project><properties><spring-kafka.version>2.6.1</spring-kafka.version></properties></project>"#,
        );
    let (_temp_dir, cache) = create_test_cache(spring_boot_2_4());

    let report = check_pom(project.root(), "pom.xml", &cache).await;

    assert_eq!(
        report.properties,
        vec![
            "spring-kafka.version".to_string(),
            "spring-kafka.version".to_string()
        ]
    );
}

#[tokio::test]
async fn cache_directory_inside_project_is_not_searched() {
    let project = TestProject::new()
        .with_file("pom.xml", PARENT_POM)
        .with_file("build-cache/pom.xml", "<project><parent></project>");
    let cache = ReferenceCache::new(project.root().join("build-cache"), spring_boot_2_4());

    let report = check_pom(project.root(), "pom.xml", &cache).await;

    assert_eq!(report.spring_boot_version.as_deref(), Some("2.4.0"));
    assert_eq!(report.properties, vec!["spring-kafka.version".to_string()]);
}
