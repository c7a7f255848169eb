#[cfg(test)]
mod tests {
    use crate::dialect::Dialect;
    use crate::statement::{BuildError, StatementBuilder};
    use crate::value::{Increment, SqlValue};
    use crate::values::Values;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_basic() {
        let mut b = StatementBuilder::insert();
        b.table("user").add_value("name", "qin").add_value("age", 17_i64);
        let sql = b.to_sql().unwrap();
        assert_eq!(sql, "INSERT INTO user (`name`,`age`) VALUES (?,?)");
        assert_eq!(
            b.args(),
            &[SqlValue::String("qin".into()), SqlValue::I64(17)]
        );
    }

    #[test]
    fn insert_field_placeholder_arg_counts_match() {
        let mut b = StatementBuilder::insert();
        b.table("t");
        for (i, k) in ["a", "b", "c", "d"].iter().enumerate() {
            b.add_value(*k, i as i64);
        }
        let sql = b.to_sql().unwrap();
        assert_eq!(sql.matches('?').count(), 4);
        assert_eq!(sql.matches('`').count(), 8);
        assert_eq!(b.args().len(), 4);
    }

    #[test]
    fn insert_ignore_verb() {
        let mut b = StatementBuilder::insert_ignore();
        b.table("user").add_value("name", "qin");
        let sql = b.to_sql().unwrap();
        assert_eq!(sql, "INSERT IGNORE INTO user (`name`) VALUES (?)");
    }

    #[test]
    fn insert_without_table_fails() {
        let mut b = StatementBuilder::insert();
        b.add_value("a", 1_i64);
        assert_eq!(b.to_sql(), Err(BuildError::MissingTable));
    }

    #[test]
    fn insert_without_values_fails() {
        let mut b = StatementBuilder::insert();
        b.table("user");
        assert_eq!(b.to_sql(), Err(BuildError::MissingValues));
    }

    #[test]
    fn insert_increment_binds_delta() {
        let mut b = StatementBuilder::insert();
        b.table("user").add_value("score", Increment::by(5));
        let sql = b.to_sql().unwrap();
        assert_eq!(sql, "INSERT INTO user (`score`) VALUES (?)");
        assert_eq!(b.args(), &[SqlValue::I64(5)]);
    }

    #[test]
    fn delete_without_table_is_noop() {
        let mut b = StatementBuilder::delete();
        assert_eq!(b.to_sql().unwrap(), "");
        assert!(b.args().is_empty());
    }

    #[test]
    fn delete_without_filter_is_rejected() {
        let mut b = StatementBuilder::delete();
        b.table("user");
        assert_eq!(b.to_sql(), Err(BuildError::UnsafeBulkDelete));
    }

    #[test]
    fn delete_with_unsafe_override() {
        let mut b = StatementBuilder::delete();
        b.table("user").unsafe_(true);
        assert_eq!(b.to_sql().unwrap(), "DELETE user FROM user");
    }

    #[test]
    fn delete_with_filter() {
        let mut b = StatementBuilder::delete();
        b.table("user").where_("uid=1");
        assert_eq!(b.to_sql().unwrap(), "DELETE user FROM user WHERE uid=1");
    }

    #[test]
    fn update_without_table_is_noop() {
        let mut b = StatementBuilder::update();
        b.add_value("a", 1_i64);
        assert_eq!(b.to_sql().unwrap(), "");
    }

    #[test]
    fn update_without_filter_is_rejected() {
        let mut b = StatementBuilder::update();
        b.table("user").add_value("a", 1_i64);
        assert_eq!(b.to_sql(), Err(BuildError::UnsafeBulkUpdate));
    }

    #[test]
    fn update_plain_values_bind() {
        let mut b = StatementBuilder::update();
        b.table("user")
            .where_("uid=?")
            .add_value("name", "qin")
            .add_value("age", 18_i64);
        let sql = b.to_sql().unwrap();
        assert_eq!(sql, "UPDATE user SET `name`=?,`age`=? WHERE uid=?");
        assert_eq!(
            b.args(),
            &[SqlValue::String("qin".into()), SqlValue::I64(18)]
        );
    }

    #[test]
    fn update_increment_self_reference() {
        let mut b = StatementBuilder::update();
        b.table("user").where_("uid=1").add_value("score", Increment::by(5));
        let sql = b.to_sql().unwrap();
        assert_eq!(sql, "UPDATE user SET `score`=score+5 WHERE uid=1");
        assert!(b.args().is_empty());
    }

    #[test]
    fn update_increment_negative_with_base_field() {
        let mut b = StatementBuilder::update();
        b.table("user")
            .where_("uid=1")
            .add_value("score", Increment::of("base_score", -3));
        let sql = b.to_sql().unwrap();
        assert_eq!(sql, "UPDATE user SET `score`=base_score-3 WHERE uid=1");
        assert!(b.args().is_empty());
    }

    #[test]
    fn update_mixes_plain_and_increment() {
        let mut b = StatementBuilder::update();
        b.table("user")
            .where_("uid=?")
            .add_value("name", "qin")
            .add_value("score", Increment::by(1));
        let sql = b.to_sql().unwrap();
        assert_eq!(sql, "UPDATE user SET `name`=?,`score`=score+1 WHERE uid=?");
        // 增量值不绑定参数
        assert_eq!(b.args(), &[SqlValue::String("qin".into())]);
    }

    #[test]
    fn insert_or_update_without_table_is_noop() {
        let mut b = StatementBuilder::insert_or_update();
        b.add_value("a", 1_i64);
        assert_eq!(b.to_sql().unwrap(), "");
    }

    #[test]
    fn insert_or_update_basic() {
        let mut b = StatementBuilder::insert_or_update();
        b.table("user")
            .add_value("uid", 7_i64)
            .add_value("name", "qin")
            .add_value2("name", "qin")
            .add_value2("login_count", Increment::by(1));
        let sql = b.to_sql().unwrap();
        assert_eq!(
            sql,
            "INSERT INTO user (`uid`,`name`) VALUES (?,?) \
             ON DUPLICATE KEY UPDATE `name`=?,`login_count`=login_count+1"
        );
        assert_eq!(
            b.args(),
            &[
                SqlValue::I64(7),
                SqlValue::String("qin".into()),
                SqlValue::String("qin".into()),
            ]
        );
    }

    #[test]
    fn select_all_clauses() {
        let mut b = StatementBuilder::select("uid,name");
        b.table("user")
            .where_("age>?")
            .group_by("city")
            .order_by("uid DESC")
            .limit_offset(10, 20);
        let sql = b.to_sql().unwrap();
        assert_eq!(
            sql,
            "SELECT uid,name FROM user WHERE age>? GROUP BY city ORDER BY uid DESC LIMIT 20,10"
        );
    }

    #[test]
    fn select_without_table() {
        let mut b = StatementBuilder::select("1");
        assert_eq!(b.to_sql().unwrap(), "SELECT 1");
    }

    #[test]
    fn select_limit_only_for_mysql_family() {
        let mut b = StatementBuilder::select("*");
        b.table("user").limit(10);
        b.set_dialect(Dialect::sql_server());
        let sql = b.to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM user");
    }

    #[test]
    fn select_limit_defaults_to_zero_offset() {
        let mut b = StatementBuilder::select("*");
        b.table("user").limit(1);
        assert_eq!(b.to_sql().unwrap(), "SELECT * FROM user LIMIT 0,1");
    }

    #[test]
    fn dialect_quote_symbol_applies_to_fields() {
        let mut b = StatementBuilder::insert();
        b.set_dialect(Dialect::sql_server());
        b.table("user").add_value("name", "qin");
        let sql = b.to_sql().unwrap();
        assert_eq!(sql, "INSERT INTO user (\"name\") VALUES (?)");
    }

    #[test]
    fn recompile_rebuilds_args() {
        let mut b = StatementBuilder::insert();
        b.table("user").add_value("a", 1_i64);
        b.to_sql().unwrap();
        b.to_sql().unwrap();
        assert_eq!(b.args(), &[SqlValue::I64(1)]);
    }

    #[test]
    fn to_full_sql_leaves_no_marker() {
        let mut b = StatementBuilder::insert();
        b.table("user").add_value("name", "O'Brien").add_value("age", 17_i64);
        let sql = b.to_full_sql().unwrap();
        assert_eq!(sql, "INSERT INTO user (`name`,`age`) VALUES ('OBrien',17)");
        assert!(!sql.contains('?'));
    }

    #[test]
    fn values_setter_replaces_whole_set() {
        let mut vals = Values::new();
        vals.add("a", 1_i64);
        let mut b = StatementBuilder::insert();
        b.table("t").add_value("zzz", 9_i64).values(vals);
        let sql = b.to_sql().unwrap();
        assert_eq!(sql, "INSERT INTO t (`a`) VALUES (?)");
    }
}
