use crate::{
    ast::merge::{Merge, MergeAssignment, MergeMatched, MergeNotMatched},
    renderer::Render,
};

impl Render for Merge {
    fn render(&self, r: &mut super::Renderer) {
        r.sql.push_str("MERGE INTO ");
        r.render_table_ref(&self.target);
        if let Some(alias) = &self.target_alias {
            r.sql.push_str(" AS ");
            r.sql.push_str(&r.dialect.quote_identifier(alias));
        }

        r.sql.push_str(" USING ");
        r.render_table_ref(&self.source);
        if let Some(alias) = &self.source_alias {
            r.sql.push_str(" AS ");
            r.sql.push_str(&r.dialect.quote_identifier(alias));
        }

        r.sql.push_str(" ON ");
        self.on.render(r);

        if let Some(matched) = &self.when_matched {
            r.sql.push(' ');
            matched.render(r);
        }

        if let Some(not_matched) = &self.when_not_matched {
            r.sql.push(' ');
            not_matched.render(r);
        }

        r.sql.push(';');
    }
}

impl Render for MergeMatched {
    fn render(&self, r: &mut super::Renderer) {
        match self {
            MergeMatched::Update { assignments } => {
                r.sql.push_str("WHEN MATCHED THEN UPDATE SET ");
                for (i, assignment) in assignments.iter().enumerate() {
                    if i > 0 {
                        r.sql.push_str(", ");
                    }
                    assignment.render(r);
                }
            }
            MergeMatched::DoNothing => {
                r.sql.push_str("WHEN MATCHED THEN DO NOTHING");
            }
        }
    }
}

impl Render for MergeNotMatched {
    fn render(&self, r: &mut super::Renderer) {
        r.sql.push_str("WHEN NOT MATCHED THEN INSERT (");
        let quoted_cols: Vec<String> = self
            .columns
            .iter()
            .map(|c| r.dialect.quote_identifier(c))
            .collect();
        r.sql.push_str(&quoted_cols.join(", "));
        r.sql.push_str(") VALUES (");

        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            value.render(r);
        }
        r.sql.push(')');
    }
}

impl Render for MergeAssignment {
    fn render(&self, r: &mut super::Renderer) {
        r.sql.push_str(&r.dialect.quote_identifier(&self.column));
        r.sql.push_str(" = ");
        self.value.render(r);
    }
}
