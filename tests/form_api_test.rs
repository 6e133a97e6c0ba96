// ==========================================
// FormApi 集成测试
// ==========================================
// 测试目标: 验证会话状态契约与提交流程 (计算 + 配置持久化)
// ==========================================


use wage_adjust::config::{ConfigStore, DEFAULT_MIN_WAGE};
use wage_adjust::{ApiError, EntryHandle, FormApi, HourArea};
use test_helpers::{create_config_file, missing_config_path};

#[test]
fn test_session_seeded_from_persisted_rate() {
    // 启动时以持久化的最低工资预填, 每个分区各一个空行
    let (_temp_file, path) =
        create_config_file(r#"{"Mindestlohn": "14,50"}"#).expect("Failed to create config file");

    let api = FormApi::new(ConfigStore::new(&path));

    assert_eq!(api.state().min_wage_text(), "14,50");
    assert_eq!(api.state().payout_text(), "");
    assert_eq!(api.state().entry_count(HourArea::Primary), 1);
    assert_eq!(api.state().entry_count(HourArea::Secondary), 1);
}

#[test]
fn test_session_seeded_with_default_when_no_config() {
    let (_temp_dir, path) = missing_config_path().expect("Failed to create temp dir");

    let api = FormApi::new(ConfigStore::new(&path));

    assert_eq!(
        api.state().min_wage_text(),
        DEFAULT_MIN_WAGE,
        "Missing config should seed the fixed default"
    );
}

#[test]
fn test_add_entry_grows_only_target_area() {
    // 加行只影响目标分区
    let (_temp_dir, path) = missing_config_path().expect("Failed to create temp dir");
    let mut api = FormApi::new(ConfigStore::new(&path));

    let h1 = api.add_hour_entry(HourArea::Primary, None);
    let h2 = api.add_hour_entry(HourArea::Primary, None);

    assert_eq!(h1.index, 1, "Handles should follow append order");
    assert_eq!(h2.index, 2);
    assert_eq!(api.state().entry_count(HourArea::Primary), 3);
    assert_eq!(
        api.state().entry_count(HourArea::Secondary),
        1,
        "The other area must be unaffected"
    );
}

#[test]
fn test_set_hour_text_with_foreign_handle_fails() {
    let (_temp_dir, path) = missing_config_path().expect("Failed to create temp dir");
    let mut api = FormApi::new(ConfigStore::new(&path));

    let stale = EntryHandle {
        area: HourArea::Secondary,
        index: 7,
    };

    match api.set_hour_text(stale, "3") {
        Err(ApiError::NotFound(msg)) => {
            assert!(msg.contains("SECONDARY"), "Error should name the area: {}", msg);
        }
        other => panic!("Expected NotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_submit_computes_and_persists_rate() {
    // 提交 = 持久化最低工资 + 计算
    let (_temp_dir, path) = missing_config_path().expect("Failed to create temp dir");
    let mut api = FormApi::new(ConfigStore::new(&path));

    api.set_min_wage_text("10");
    api.set_payout_text("100");
    let first_row = EntryHandle {
        area: HourArea::Primary,
        index: 0,
    };
    api.set_hour_text(first_row, "5").expect("Handle is valid");
    let second_row = api.add_hour_entry(HourArea::Primary, Some("5"));
    api.set_hour_text(second_row, "5").expect("Handle is valid");

    let result = api.submit();

    assert_eq!(result.adjustment, 50.0);
    assert!(result.display.ends_with("50.00€"));

    // 提交后新开存储应读到本次输入的原始文本
    let reread = ConfigStore::new(&path);
    assert_eq!(reread.load(), "10", "Submit must persist the raw rate text");
}

#[test]
fn test_submit_persists_comma_text_verbatim() {
    // 最低工资按原始文本持久化, 不做数值规范化
    let (_temp_dir, path) = missing_config_path().expect("Failed to create temp dir");
    let mut api = FormApi::new(ConfigStore::new(&path));

    api.set_min_wage_text("15,00");
    api.submit();

    assert_eq!(ConfigStore::new(&path).load(), "15,00");
}

#[test]
fn test_submit_survives_unwritable_config_path() {
    // 配置写入失败时提交仍返回计算结果 (尽力而为的持久化)
    let (temp_dir, _path) = missing_config_path().expect("Failed to create temp dir");
    let dir_as_config_path = temp_dir.path().to_str().unwrap().to_string();

    let mut api = FormApi::new(ConfigStore::new(&dir_as_config_path));
    api.set_min_wage_text("10");
    api.set_payout_text("30");

    let result = api.submit();

    assert_eq!(
        result.adjustment, 10.0,
        "Submit must still return a result when persistence fails"
    );
}

#[test]
fn test_repeated_submissions_reflect_edits() {
    // 多次提交: 每次按当前字段快照重新计算
    let (_temp_dir, path) = missing_config_path().expect("Failed to create temp dir");
    let mut api = FormApi::new(ConfigStore::new(&path));

    api.set_min_wage_text("10");
    api.set_payout_text("100");
    let row = EntryHandle {
        area: HourArea::Primary,
        index: 0,
    };
    api.set_hour_text(row, "10").expect("Handle is valid");

    let first = api.submit();
    assert_eq!(first.adjustment, 50.0);

    api.set_payout_text("130");
    let second = api.submit();
    assert_eq!(second.adjustment, 60.0, "Second submit should see the edited payout");
}
