//! Rendering tests for the SQL family.

use crate::config::WriterConfig;
use crate::go;
use crate::node::{Node, NodeList, NodeSlice};
use crate::sql::*;
use crate::{to_string, to_string_with};

fn col(qual: &str, name: &str) -> ColumnIdent {
    let c = ColumnIdent::new(name).unwrap();
    if qual.is_empty() { c } else { c.qual(qual) }
}

fn table(name: &str, alias: &str) -> Ident {
    Ident::new(name).unwrap().alias(alias)
}

fn eq(lhs: impl Into<ValueExpr>, rhs: impl Into<ValueExpr>) -> ComparisonPredicate {
    ComparisonPredicate::new(lhs, CmpOp::Eq, rhs)
}

fn abc() -> BoolValueExprList {
    BoolValueExprList::new(col("", "a"))
        .item(BoolOpExpr::and(col("", "b")))
        .item(BoolOpExpr::or_not(col("", "c")))
}

#[test]
fn empty_clauses_render_nothing() {
    assert_eq!(to_string(&WhereClause::default()).unwrap(), "");
    assert_eq!(to_string(&UsingClause::default()).unwrap(), "");
    assert_eq!(to_string(&ReturningClause::default()).unwrap(), "");
    assert_eq!(to_string(&JoinCondition::default()).unwrap(), "");
}

#[test]
fn delete_without_clauses() {
    let stmt = DeleteStatement::new(Ident::new("t").unwrap());
    assert_eq!(to_string(&stmt).unwrap(), r#"DELETE FROM "t""#);
}

#[test]
fn delete_with_every_clause() {
    let stmt = DeleteStatement::new(table("users", "u"))
        .using(table("orders", "o"))
        .using(TableJoin::left(
            table("items", "i"),
            eq(col("i", "order_id"), col("o", "id")),
        ))
        .where_(
            BoolValueExprList::new(eq(col("u", "id"), col("o", "user_id")))
                .item(BoolOpExpr::and(
                    BoolValueExprList::new(IsPredicate::null(col("o", "shipped_at")))
                        .item(BoolOpExpr::or(eq(col("o", "status"), OrdinalParameterSpec(1))))
                        .parenthesized(true)
                        .list_style(true),
                ))
                .list_style(true),
        )
        .returning(col("u", "id"))
        .returning(Coalesce::new(col("u", "email"), Literal::new("''")));

    let expected = [
        r#"DELETE FROM "users" AS u"#,
        "\tUSING \"orders\" AS o",
        "\tLEFT JOIN \"items\" AS i ON i.\"order_id\" = o.\"id\"",
        "\tWHERE u.\"id\" = o.\"user_id\"",
        "\tAND (",
        "\t\to.\"shipped_at\" IS NULL",
        "\t\tOR o.\"status\" = $1",
        "\t)",
        "\tRETURNING u.\"id\"",
        "\t, COALESCE(u.\"email\", '')",
    ]
    .join("\n");
    assert_eq!(to_string(&stmt).unwrap(), expected);
}

#[test]
fn delete_skips_absent_clauses_between_present_ones() {
    let stmt = DeleteStatement::new(Ident::new("t").unwrap()).returning(col("", "id"));
    assert_eq!(to_string(&stmt).unwrap(), "DELETE FROM \"t\"\n\tRETURNING \"id\"");
}

#[test]
fn delete_starts_at_column_zero() {
    let config = WriterConfig::new().initial_indent(3);
    let stmt = DeleteStatement::new(Ident::new("t").unwrap()).where_(col("", "gone"));
    assert_eq!(
        to_string_with(&config, &stmt).unwrap(),
        "DELETE FROM \"t\"\n\tWHERE \"gone\""
    );
}

#[test]
fn delete_indent_does_not_leak_into_next_node() {
    let list: NodeList<Box<dyn Node>> = NodeList(vec![
        Box::new(DeleteStatement::new(Ident::new("t").unwrap()).where_(col("", "x"))),
        Box::new(Ident::new("after").unwrap()),
    ]);
    assert_eq!(
        to_string(&list).unwrap(),
        "DELETE FROM \"t\"\n\tWHERE \"x\"\n\"after\""
    );
}

#[test]
fn left_join_with_condition() {
    let join = TableJoin::left(
        Ident::new("orders").unwrap(),
        eq(col("o", "uid"), col("u", "id")),
    );
    assert_eq!(
        to_string(&join).unwrap(),
        r#"LEFT JOIN "orders" ON o."uid" = u."id""#
    );
}

#[test]
fn other_join_types() {
    let rel = || Ident::new("r").unwrap();
    let cond = || col("", "ok");
    assert_eq!(
        to_string(&TableJoin::right(rel(), cond())).unwrap(),
        r#"RIGHT JOIN "r" ON "ok""#
    );
    assert_eq!(
        to_string(&TableJoin::full(rel(), cond())).unwrap(),
        r#"FULL JOIN "r" ON "ok""#
    );
    assert_eq!(to_string(&TableJoin::cross(rel())).unwrap(), r#"CROSS JOIN "r""#);
    assert_eq!(
        to_string(&TableJoin::new(JoinType::None, rel(), JoinCondition::default())).unwrap(),
        r#""r""#
    );
}

#[test]
fn cross_join_ignores_condition() {
    let join = TableJoin::new(
        JoinType::Cross,
        Ident::new("r").unwrap(),
        JoinCondition::on(col("", "x")),
    );
    assert_eq!(to_string(&join).unwrap(), r#"CROSS JOIN "r""#);
}

#[test]
fn bool_chain_compact() {
    assert_eq!(to_string(&abc()).unwrap(), r#""a" AND "b" OR NOT "c""#);
    assert_eq!(
        to_string(&abc().parenthesized(true)).unwrap(),
        r#"("a" AND "b" OR NOT "c")"#
    );
}

#[test]
fn bool_chain_list_style() {
    assert_eq!(
        to_string(&abc().list_style(true)).unwrap(),
        "\"a\"\nAND \"b\"\nOR NOT \"c\""
    );
    assert_eq!(
        to_string(&abc().list_style(true).parenthesized(true)).unwrap(),
        "(\n\t\"a\"\n\tAND \"b\"\n\tOR NOT \"c\"\n)"
    );
}

#[test]
fn bool_chain_keeps_operator_order() {
    let list = BoolValueExprList::new(col("", "a"))
        .item(BoolOpExpr::or(col("", "b")))
        .item(BoolOpExpr::and_not(col("", "c")))
        .item(BoolOpExpr::and(col("", "d")))
        .item(BoolOpExpr::or_not(col("", "e")));
    assert_eq!(
        to_string(&list).unwrap(),
        r#""a" OR "b" AND NOT "c" AND "d" OR NOT "e""#
    );
}

#[test]
fn where_with_nested_compact_group() {
    let cond = BoolValueExprList::new(eq(col("", "id"), OrdinalParameterSpec(1)))
        .item(BoolOpExpr::and(
            BoolValueExprList::new(IsPredicate::not_null(col("", "a")))
                .item(BoolOpExpr::or(col("", "b")))
                .parenthesized(true),
        ));
    assert_eq!(
        to_string(&WhereClause::new(cond)).unwrap(),
        r#"WHERE "id" = $1 AND ("a" IS NOT NULL OR "b")"#
    );
}

#[test]
fn comparison_operators() {
    let cases = [
        (CmpOp::Eq, "="),
        (CmpOp::NotEq, "<>"),
        (CmpOp::Lt, "<"),
        (CmpOp::LtEq, "<="),
        (CmpOp::Gt, ">"),
        (CmpOp::GtEq, ">="),
    ];
    for (op, text) in cases {
        let p = ComparisonPredicate::new(col("", "n"), op, Literal::new("0"));
        assert_eq!(to_string(&p).unwrap(), format!("\"n\" {text} 0"));
    }

    let any = ComparisonPredicate::new(
        col("", "id"),
        CmpOp::Eq,
        QuantifiedExpr::new(Quantifier::Any, OrdinalParameterSpec(1)),
    );
    assert_eq!(to_string(&any).unwrap(), r#""id" = ANY($1)"#);
}

#[test]
fn general_expressions() {
    let parts: NodeSlice<Box<dyn Node>> =
        NodeSlice(vec![Box::new(col("", "a")), Box::new(ISNULL)]);
    assert_eq!(to_string(&parts).unwrap(), r#""a" IS NULL"#);
    assert_eq!(to_string(&ISNOTNULL).unwrap(), " IS NOT NULL");
    assert_eq!(to_string(&NULL).unwrap(), "NULL");
    assert_eq!(to_string(&IsExpr::not(NULL)).unwrap(), " IS NOT NULL");

    let sum = BinaryExpr::new(col("", "n"), BinaryOp::Add, PositionalParameter(2));
    assert_eq!(to_string(&sum).unwrap(), r#""n" + $2"#);
    let diff = BinaryExpr::new(sum, BinaryOp::Sub, Literal::new("1"));
    assert_eq!(to_string(&diff).unwrap(), r#""n" + $2 - 1"#);
}

#[test]
fn markers() {
    let parts: NodeSlice<Box<dyn Node>> = NodeSlice(vec![
        Box::new(Keyword("SELECT")),
        Box::new(SpaceChar),
        Box::new(DEFAULT),
        Box::new(NewLine),
        Box::new(Keyword("FROM")),
    ]);
    assert_eq!(to_string(&parts).unwrap(), "SELECT DEFAULT\nFROM");
}

#[test]
fn noop_fills_every_slot() {
    assert_eq!(to_string(&NoOp).unwrap(), "");
    assert_eq!(to_string(&NOOP).unwrap(), "");
    assert_eq!(to_string(&Expr::from(NoOp)).unwrap(), "");
    assert_eq!(to_string(&ValueExpr::from(NoOp)).unwrap(), "");
    assert_eq!(to_string(&BoolValueExpr::from(NoOp)).unwrap(), "");
}

#[test]
fn names_and_parameters() {
    assert_eq!(to_string(&Name::new("id").unwrap()).unwrap(), r#""id""#);
    assert_eq!(
        to_string(&Ident::new("id").unwrap().qual("t").alias("x")).unwrap(),
        r#"t."id" AS x"#
    );
    assert_eq!(to_string(&OrdinalParameterSpec(1)).unwrap(), "$1");
    assert_eq!(to_string(&DynamicParameterSpec).unwrap(), "?");
}

#[test]
fn host_value_inside_raw_string() {
    let query: NodeSlice<Box<dyn Node>> = NodeSlice(vec![
        Box::new(go::ValueLit::new("`")),
        Box::new(
            DeleteStatement::new(Ident::new("jobs").unwrap())
                .where_(eq(col("", "id"), HostValue::spliced(go::Ident::new("id")))),
        ),
        Box::new(go::ValueLit::new("`")),
    ]);
    assert_eq!(
        to_string(&query).unwrap(),
        "`DELETE FROM \"jobs\"\n\tWHERE \"id\" = ` + id + ``"
    );
}

#[test]
fn rendering_is_deterministic() {
    let stmt = DeleteStatement::new(table("a", "x"))
        .using(TableJoin::cross(Ident::new("b").unwrap()))
        .where_(abc().list_style(true).parenthesized(true));
    let first = to_string(&stmt).unwrap();
    let second = to_string(&stmt).unwrap();
    assert_eq!(first, second);
}
