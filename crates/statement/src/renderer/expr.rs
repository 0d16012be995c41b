use crate::{
    ast::expr::{BinaryOp, BinaryOperator, Expr, Ident},
    renderer::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Identifier(ident) => ident.render(r),
            Expr::Literal(raw) => r.sql.push_str(raw),
            Expr::BinaryOp(op) => op.render(r),
        }
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) {
        if let Some(qualifier) = &self.qualifier {
            r.sql.push_str(&r.dialect.quote_identifier(qualifier));
            r.sql.push('.');
        }
        r.sql.push_str(&r.dialect.quote_identifier(&self.name));
    }
}

impl Render for BinaryOp {
    fn render(&self, r: &mut Renderer) {
        r.sql.push('(');
        self.left.render(r);

        let op_str = match self.op {
            BinaryOperator::Eq => " = ",
            BinaryOperator::NotEq => " <> ",
            BinaryOperator::Lt => " < ",
            BinaryOperator::LtEq => " <= ",
            BinaryOperator::Gt => " > ",
            BinaryOperator::GtEq => " >= ",
            BinaryOperator::And => " AND ",
            BinaryOperator::Or => " OR ",
        };
        r.sql.push_str(op_str);

        self.right.render(r);
        r.sql.push(')');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{BigQuery, Postgres};

    fn qualified(qualifier: &str, name: &str) -> Expr {
        Expr::Identifier(Ident {
            qualifier: Some(qualifier.to_string()),
            name: name.to_string(),
        })
    }

    #[test]
    fn test_render_qualified_identifier() {
        let expr = qualified("S", "customer_id");

        let dialect = Postgres;
        let mut renderer = Renderer::new(&dialect);
        expr.render(&mut renderer);

        assert_eq!(renderer.finish(), r#""S"."customer_id""#);
    }

    #[test]
    fn test_render_equality_chain_bigquery() {
        let expr = Expr::BinaryOp(Box::new(BinaryOp {
            left: Expr::BinaryOp(Box::new(BinaryOp {
                left: qualified("T", "order_id"),
                op: BinaryOperator::Eq,
                right: qualified("S", "order_id"),
            })),
            op: BinaryOperator::And,
            right: Expr::BinaryOp(Box::new(BinaryOp {
                left: qualified("T", "order_line_item"),
                op: BinaryOperator::Eq,
                right: qualified("S", "order_line_item"),
            })),
        }));

        let dialect = BigQuery;
        let mut renderer = Renderer::new(&dialect);
        expr.render(&mut renderer);

        assert_eq!(
            renderer.finish(),
            "((`T`.`order_id` = `S`.`order_id`) AND (`T`.`order_line_item` = `S`.`order_line_item`))"
        );
    }

    #[test]
    fn test_render_literal_verbatim() {
        let expr = Expr::Literal("TRUE".to_string());

        let dialect = Postgres;
        let mut renderer = Renderer::new(&dialect);
        expr.render(&mut renderer);

        assert_eq!(renderer.finish(), "TRUE");
    }
}
