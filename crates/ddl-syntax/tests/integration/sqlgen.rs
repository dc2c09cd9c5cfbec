use crate::fixtures::{BOOK_SCRIPT, MYSQLDUMP_SCRIPT, NON_PK_CLUSTERING_SCRIPT};
use ddl_syntax::{TableDefinition, extract_first_create_table};

#[test]
fn test_book_generated_sql() {
    let table = TableDefinition::new(extract_first_create_table(BOOK_SCRIPT));

    assert_eq!(
        table.drop_constraints_sql(),
        "ALTER TABLE `book` DROP CONSTRAINT `fk_book_author`"
    );
    assert_eq!(
        table.add_constraints_sql(),
        "ALTER TABLE `book` ADD CONSTRAINT `fk_book_author` FOREIGN KEY (`author_id`) REFERENCES `author` (`id`) ON DELETE CASCADE"
    );
    assert_eq!(
        table.drop_secondary_indexes_sql(),
        "ALTER TABLE `book` DROP INDEX `fk_book_author`"
    );
    assert_eq!(
        table.add_secondary_indexes_sql(),
        "ALTER TABLE `book` ADD KEY `fk_book_author` (`author_id`)"
    );
}

#[test]
fn test_clustering_key_is_never_dropped() {
    let table = TableDefinition::new(NON_PK_CLUSTERING_SCRIPT);

    assert!(table.add_secondary_indexes_sql().is_empty());
    assert!(table.drop_secondary_indexes_sql().is_empty());
}

#[test]
fn test_clustering_key_excluded_but_others_kept() {
    let table = TableDefinition::new(
        "CREATE TABLE `t` (`a` int, `b` int, UNIQUE KEY `ua` (`a`), KEY `kb` (`b`)) ENGINE=InnoDB;",
    );

    assert_eq!(table.secondary_indexes.len(), 2);
    assert_eq!(table.drop_secondary_indexes_sql(), "ALTER TABLE `t` DROP INDEX `kb`");
    assert_eq!(table.add_secondary_indexes_sql(), "ALTER TABLE `t` ADD KEY `kb` (`b`)");
}

#[test]
fn test_generation_preserves_declaration_order() {
    let table = TableDefinition::from_script(MYSQLDUMP_SCRIPT).unwrap();

    assert_eq!(
        table.drop_constraints_sql(),
        "ALTER TABLE `orders` DROP CONSTRAINT `fk_orders_customer`, DROP CONSTRAINT `fk_orders_product`"
    );
    assert_eq!(
        table.add_constraints_sql(),
        "ALTER TABLE `orders` ADD CONSTRAINT `fk_orders_customer` FOREIGN KEY (`customer_id`) REFERENCES `customer` (`id`), \
         ADD CONSTRAINT `fk_orders_product` FOREIGN KEY (`product_id`) REFERENCES `product` (`id`) ON DELETE CASCADE ON UPDATE CASCADE"
    );
    assert_eq!(
        table.drop_secondary_indexes_sql(),
        "ALTER TABLE `orders` DROP INDEX `uq_customer_product`, DROP INDEX `fk_orders_product`, DROP INDEX `ft_body`"
    );
    assert_eq!(
        table.add_secondary_indexes_sql(),
        "ALTER TABLE `orders` ADD UNIQUE KEY `uq_customer_product` (`customer_id`,`product_id`), \
         ADD KEY `fk_orders_product` (`product_id`), ADD FULLTEXT KEY `ft_body` (`body`)"
    );
}

#[test]
fn test_drop_then_add_restores_definitions() {
    let table = TableDefinition::from_script(MYSQLDUMP_SCRIPT).unwrap();
    let added = table.add_constraints_sql();

    for constraint in &table.constraints {
        assert!(added.contains(&format!("ADD {}", constraint.definition)));
        assert!(
            table
                .drop_constraints_sql()
                .contains(&format!("DROP CONSTRAINT {}", constraint.name))
        );
    }
}

#[test]
fn test_unnamed_index_is_dropped_by_assigned_name() {
    let table = TableDefinition::new("CREATE TABLE `t` (`a` int, `b` int, KEY (`a`), KEY (`a`, `b`)) ENGINE=InnoDB;");

    assert_eq!(
        table.drop_secondary_indexes_sql(),
        "ALTER TABLE `t` DROP INDEX `a`, DROP INDEX `a_2`"
    );
    assert_eq!(
        table.add_secondary_indexes_sql(),
        "ALTER TABLE `t` ADD KEY (`a`), ADD KEY (`a`, `b`)"
    );
}

#[test]
fn test_unnamed_unique_clustering_key_is_never_dropped() {
    let table = TableDefinition::new("CREATE TABLE `t` (`a` int NOT NULL, UNIQUE KEY (`a`)) ENGINE=InnoDB;");

    assert_eq!(table.non_pk_clustering_key_name, "`a`");
    assert!(table.drop_secondary_indexes_sql().is_empty());
    assert!(table.add_secondary_indexes_sql().is_empty());
}
