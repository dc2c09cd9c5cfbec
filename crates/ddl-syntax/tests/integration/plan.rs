use crate::fixtures::{BOOK_SCRIPT, NON_PK_CLUSTERING_SCRIPT};
use ddl_syntax::{DdlError, EngineSet, LoadPlan, PlanOptions};

#[test]
fn test_book_plan_orders_statements() {
    let plan = LoadPlan::from_script(BOOK_SCRIPT, &PlanOptions::default()).unwrap();

    assert_eq!(plan.table_name, "`book`");
    assert_eq!(
        plan.pre_load,
        vec![
            "ALTER TABLE `book` DROP CONSTRAINT `fk_book_author`",
            "ALTER TABLE `book` DROP INDEX `fk_book_author`",
        ]
    );
    assert_eq!(
        plan.post_load,
        vec![
            "ALTER TABLE `book` ADD KEY `fk_book_author` (`author_id`)",
            "ALTER TABLE `book` ADD CONSTRAINT `fk_book_author` FOREIGN KEY (`author_id`) REFERENCES `author` (`id`) ON DELETE CASCADE",
        ]
    );
}

#[test]
fn test_plan_without_droppable_keys_is_empty() {
    let plan = LoadPlan::from_script(NON_PK_CLUSTERING_SCRIPT, &PlanOptions::default()).unwrap();
    assert!(plan.is_empty());
}

#[test]
fn test_plan_skips_unselected_engines() {
    let script = "CREATE TABLE `t` (`a` int, KEY `k` (`a`)) ENGINE=MyISAM;";

    let plan = LoadPlan::from_script(script, &PlanOptions::default()).unwrap();
    assert!(plan.is_empty());

    let options = PlanOptions {
        engines: EngineSet::Any,
        ..PlanOptions::default()
    };
    let plan = LoadPlan::from_script(script, &options).unwrap();
    assert_eq!(plan.pre_load, vec!["ALTER TABLE `t` DROP INDEX `k`"]);
}

#[test]
fn test_plan_halves_can_be_disabled() {
    let options = PlanOptions {
        drop_constraints: false,
        ..PlanOptions::default()
    };
    let plan = LoadPlan::from_script(BOOK_SCRIPT, &options).unwrap();
    assert_eq!(plan.pre_load, vec!["ALTER TABLE `book` DROP INDEX `fk_book_author`"]);

    let options = PlanOptions {
        drop_indexes: false,
        ..PlanOptions::default()
    };
    let plan = LoadPlan::from_script(BOOK_SCRIPT, &options).unwrap();
    assert_eq!(plan.pre_load, vec!["ALTER TABLE `book` DROP CONSTRAINT `fk_book_author`"]);
}

#[test]
fn test_plan_requires_create_table() {
    assert_eq!(
        LoadPlan::from_script("-- CREATE TABLE x (a int);", &PlanOptions::default()),
        Err(DdlError::NoCreateTable)
    );
}
