//! 日志系统集成测试
//!
//! 测试范围:
//! - 日志配置序列化
//! - 日志文件创建和写入
//!
//! flexi_logger 使用全局 logger，文件写入相关的功能在同一个测试中验证

mod common;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use graphpath::config::{Config, LogConfig};
use graphpath::utils::logging;

/// 测试日志配置序列化和反序列化
#[test]
fn test_log_config_serialization() {
    let mut config = Config::default();
    config.log = LogConfig {
        level: "debug".to_string(),
        dir: "test_logs".to_string(),
        file: "test_graphpath".to_string(),
        max_file_size: 50 * 1024 * 1024,
        max_files: 3,
    };

    let toml_str = toml::to_string_pretty(&config).expect("序列化配置失败");
    assert!(toml_str.contains("level = \"debug\""));
    assert!(toml_str.contains("max_file_size = 52428800"));

    let loaded_config: Config = toml::from_str(&toml_str).expect("反序列化配置失败");
    assert_eq!(loaded_config.log, config.log);
}

/// 集成测试：日志写入文件，并记录算法运行摘要
#[test]
fn test_logging_to_file() {
    let temp_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("test-logs")
        .join(format!("integration_test_{}", std::process::id()));
    let _ = fs::remove_dir_all(&temp_dir);
    fs::create_dir_all(&temp_dir).expect("创建测试目录失败");

    let config = LogConfig {
        level: "debug".to_string(),
        dir: temp_dir.to_string_lossy().into_owned(),
        file: "relaxation".to_string(),
        ..LogConfig::default()
    };
    logging::init(&config).expect("日志初始化失败");
    assert!(logging::is_initialized());

    let graph = common::data_fixtures::negative_weight_graph();
    let (_, cost) = common::bellman_ford(2)
        .shortest_path(&graph, 0, 3)
        .expect("Path should exist");
    assert_eq!(cost, 8);

    logging::shutdown();
    assert!(!logging::is_initialized());
    std::thread::sleep(Duration::from_millis(200));

    let contents: String = fs::read_dir(&temp_dir)
        .expect("读取目录失败")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().contains("relaxation"))
        .filter_map(|entry| fs::read_to_string(entry.path()).ok())
        .collect();
    assert!(contents.contains("Bellman-Ford"), "日志内容: {}", contents);

    let _ = fs::remove_dir_all(&temp_dir);
}
