use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use codetree::go::{FieldElement, IntLit, SliceLit, StringLit, StructLit, Type};
use codetree::sql::{
    BoolOpExpr, BoolValueExprList, CmpOp, ColumnIdent, ComparisonPredicate, DeleteStatement, Ident,
    OrdinalParameterSpec,
};

/// DELETE FROM "t" WHERE "col0" = $1 AND "col1" = $2 ... RETURNING "col0", ...
fn build_delete(n: usize) -> DeleteStatement {
    let cmp = |i: usize| {
        ComparisonPredicate::new(
            ColumnIdent::new(format!("col{i}")).unwrap(),
            CmpOp::Eq,
            OrdinalParameterSpec(i as u32 + 1),
        )
    };

    let mut cond = BoolValueExprList::new(cmp(0)).list_style(true);
    for i in 1..n {
        cond = cond.item(BoolOpExpr::and(cmp(i)));
    }

    let mut stmt = DeleteStatement::new(Ident::new("t").unwrap()).where_(cond);
    for i in 0..n {
        stmt = stmt.returning(ColumnIdent::new(format!("col{i}")).unwrap());
    }
    stmt
}

/// A struct literal with `n` fields, every third one a nested slice.
fn build_struct_lit(n: usize, compact: bool) -> StructLit {
    let mut lit = StructLit::new(Type::name("Row")).compact(compact);
    for i in 0..n {
        let field = format!("F{i}");
        lit = if i % 3 == 0 {
            lit.field(FieldElement::new(
                field,
                SliceLit::new(vec![StringLit::new("a").into(), StringLit::new("b").into()])
                    .typ(Type::slice(Type::name("string")))
                    .compact(compact),
            ))
        } else {
            lit.field(FieldElement::new(field, IntLit(i as i64)))
        };
    }
    lit
}

fn bench_sql_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/sql_delete");

    for n in [1, 5, 10, 50, 100] {
        let stmt = build_delete(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &stmt, |b, stmt| {
            b.iter(|| black_box(codetree::to_string(stmt).unwrap()));
        });
    }

    group.finish();
}

fn bench_go_struct_lit(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/go_struct_lit");

    for n in [5, 20, 100] {
        for compact in [true, false] {
            let lit = build_struct_lit(n, compact);
            let id = format!("{n}/{}", if compact { "compact" } else { "laid_out" });
            group.bench_with_input(BenchmarkId::from_parameter(id), &lit, |b, lit| {
                b.iter(|| black_box(codetree::to_string(lit).unwrap()));
            });
        }
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/build_and_render");

    for n in [1, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let stmt = build_delete(n);
                black_box(codetree::to_string(&stmt).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_write_to_sink(c: &mut Criterion) {
    let stmt = build_delete(50);
    c.bench_function("render/write_to_sink", |b| {
        let mut buf = Vec::with_capacity(8 * 1024);
        b.iter(|| {
            buf.clear();
            codetree::write(&stmt, &mut buf).unwrap();
            black_box(buf.len());
        });
    });
}

criterion_group!(
    benches,
    bench_sql_delete,
    bench_go_struct_lit,
    bench_build_and_render,
    bench_write_to_sink
);
criterion_main!(benches);
