//! Statement rendering
//!
//! Schema definition, schema manipulation, privilege and data-manipulation
//! statements. Queries and expressions inside them go through the shared
//! [`SqlRenderer`] methods, so parameter numbering and the depth limit span
//! the whole statement.

use super::alter::*;
use super::expr::Expr;
use super::ident::{Ident, QualifiedIdent};
use super::render::{Render, SqlRenderer};
use super::schema::*;
use super::stmt::*;
use super::types::ColumnType;
use crate::error::RenderResult;

impl Render for ColumnConstraint {
    fn render(&self, renderer: &mut SqlRenderer<'_>) -> RenderResult<()> {
        match self {
            ColumnConstraint::NotNull => {
                renderer.write("NOT NULL");
                Ok(())
            }
            ColumnConstraint::Unique(unique) => renderer.render_unique(unique),
            ColumnConstraint::References(reference) => renderer.render_reference(reference),
            ColumnConstraint::Check(check) => check.render(renderer),
            ColumnConstraint::Custom(payload) => renderer.render_custom("ColumnConstraint", payload),
        }
    }
}

impl Render for TableConstraint {
    fn render(&self, renderer: &mut SqlRenderer<'_>) -> RenderResult<()> {
        match self {
            TableConstraint::Unique(unique) => renderer.render_unique(unique),
            TableConstraint::References(reference) => renderer.render_reference(reference),
            TableConstraint::Check(check) => check.render(renderer),
            TableConstraint::Custom(payload) => renderer.render_custom("TableConstraint", payload),
        }
    }
}

impl Render for CheckConstraint {
    fn render(&self, renderer: &mut SqlRenderer<'_>) -> RenderResult<()> {
        renderer.write("CHECK (");
        renderer.render_expr(&self.search)?;
        renderer.write(")");
        Ok(())
    }
}

impl<C: Render> Render for ConstraintDefinition<C> {
    fn render(&self, renderer: &mut SqlRenderer<'_>) -> RenderResult<()> {
        if let Some(name) = &self.name {
            renderer.write("CONSTRAINT ");
            renderer.write_ident(name);
            renderer.write(" ");
        }
        self.constraint.render(renderer)?;
        if let Some(check_time) = &self.check_time {
            renderer.write(if check_time.initially_deferred {
                " INITIALLY DEFERRED"
            } else {
                " INITIALLY IMMEDIATE"
            });
            renderer.write(if check_time.deferrable {
                " DEFERRABLE"
            } else {
                " NOT DEFERRABLE"
            });
            renderer.render_extensions("ConstraintCheckTime", &check_time.extensions)?;
        }
        renderer.render_extensions("ConstraintDefinition", &self.extensions)
    }
}

impl Render for ColumnDefinition {
    fn render(&self, renderer: &mut SqlRenderer<'_>) -> RenderResult<()> {
        renderer.render_column_definition(self)
    }
}

impl Render for DefaultOption {
    fn render(&self, renderer: &mut SqlRenderer<'_>) -> RenderResult<()> {
        renderer.render_default(self)
    }
}

impl SqlRenderer<'_> {
    pub fn render_statement(&mut self, stmt: &Statement) -> RenderResult<()> {
        self.nested(|r| match stmt {
            Statement::Query(query) => r.render_query(query),
            Statement::CreateSchema(def) => r.render_schema_definition(def),
            Statement::CreateTable(def) => r.render_table_definition(def),
            Statement::CreateView(def) => r.render_view_definition(def),
            Statement::CreateDomain(def) => r.render_domain_definition(def),
            Statement::Grant(grant) => r.render_grant(grant),
            Statement::Revoke(revoke) => r.render_revoke(revoke),
            Statement::AlterTable(alter) => r.render_alter_table(alter),
            Statement::AlterDomain(alter) => r.render_alter_domain(alter),
            Statement::Drop(drop) => r.render_drop(drop),
            Statement::Insert(insert) => r.render_insert(insert),
            Statement::Update(update) => r.render_update(update),
            Statement::Delete(delete) => r.render_delete(delete),
        })
    }

    // =========================================================================
    // Schema definition
    // =========================================================================

    fn render_schema_definition(&mut self, def: &SchemaDefinition) -> RenderResult<()> {
        self.write("CREATE SCHEMA ");
        self.write_qualified(&def.name)?;

        if let Some(owner) = &def.authorization {
            self.write(" AUTHORIZATION ");
            self.write_ident(owner);
        }

        if let Some(charset) = &def.character_set {
            self.write(" DEFAULT CHARACTER SET ");
            self.write_qualified(charset)?;
        }

        for element in &def.elements {
            self.write(" ");
            self.nested(|r| match element {
                SchemaElement::Table(table) => r.render_table_definition(table),
                SchemaElement::View(view) => r.render_view_definition(view),
                SchemaElement::Domain(domain) => r.render_domain_definition(domain),
                SchemaElement::Grant(grant) => r.render_grant(grant),
            })?;
        }

        self.render_extensions("SchemaDefinition", &def.extensions)
    }

    fn render_table_definition(&mut self, def: &TableDefinition) -> RenderResult<()> {
        self.write(match def.mode {
            TableMode::Persistent => "CREATE TABLE ",
            TableMode::GlobalTemp => "CREATE GLOBAL TEMPORARY TABLE ",
            TableMode::LocalTemp => "CREATE LOCAL TEMPORARY TABLE ",
        });
        self.write_qualified(&def.name)?;

        self.write(" (");
        for (i, column) in def.columns.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.render_column_definition(column)?;
        }
        for (i, constraint) in def.constraints.iter().enumerate() {
            if i > 0 || !def.columns.is_empty() {
                self.write(", ");
            }
            constraint.render(self)?;
        }
        self.write(")");

        if let Some(on_commit) = def.on_commit {
            self.write(match on_commit {
                OnCommit::Delete => " ON COMMIT DELETE ROWS",
                OnCommit::Preserve => " ON COMMIT PRESERVE ROWS",
            });
        }

        self.render_extensions("TableDefinition", &def.extensions)
    }

    pub fn render_column_definition(&mut self, column: &ColumnDefinition) -> RenderResult<()> {
        self.write_ident(&column.name);
        self.write(" ");
        match &column.column_type {
            ColumnType::DataType(data_type) => self.render_data_type(data_type)?,
            ColumnType::Domain(domain) => self.write_qualified(domain)?,
        }

        if let Some(default) = &column.default {
            self.write(" ");
            self.render_default(default)?;
        }

        for constraint in &column.constraints {
            self.write(" ");
            constraint.render(self)?;
        }

        if let Some(collation) = &column.collation {
            self.write(" COLLATE ");
            self.write_qualified(collation)?;
        }

        self.render_extensions("ColumnDefinition", &column.extensions)
    }

    fn render_view_definition(&mut self, def: &ViewDefinition) -> RenderResult<()> {
        self.write("CREATE VIEW ");
        self.write_qualified(&def.name)?;

        if !def.columns.is_empty() {
            self.write(" ");
            self.write_ident_list(&def.columns);
        }

        self.write(" AS ");
        self.render_query(&def.query)?;

        if let Some(option) = def.check_option {
            self.write(match option {
                CheckOption::Cascaded => " WITH CASCADED CHECK OPTION",
                CheckOption::Local => " WITH LOCAL CHECK OPTION",
            });
        }

        self.render_extensions("ViewDefinition", &def.extensions)
    }

    fn render_domain_definition(&mut self, def: &DomainDefinition) -> RenderResult<()> {
        self.write("CREATE DOMAIN ");
        self.write_qualified(&def.name)?;
        self.write(" AS ");
        self.render_data_type(&def.data_type)?;

        if let Some(default) = &def.default {
            self.write(" ");
            self.render_default(default)?;
        }

        for constraint in &def.constraints {
            self.write(" ");
            constraint.render(self)?;
        }

        if let Some(collation) = &def.collation {
            self.write(" COLLATE ");
            self.write_qualified(collation)?;
        }

        self.render_extensions("DomainDefinition", &def.extensions)
    }

    // =========================================================================
    // Constraints and defaults
    // =========================================================================

    fn render_unique(&mut self, unique: &UniqueConstraint) -> RenderResult<()> {
        self.write(if unique.primary_key {
            "PRIMARY KEY"
        } else {
            "UNIQUE"
        });
        if !unique.columns.is_empty() {
            self.write(" ");
            self.write_ident_list(&unique.columns);
        }
        self.render_extensions("UniqueConstraint", &unique.extensions)
    }

    fn render_reference(&mut self, reference: &ReferenceConstraint) -> RenderResult<()> {
        if !reference.referencing.is_empty() {
            self.write("FOREIGN KEY ");
            self.write_ident_list(&reference.referencing);
            self.write(" ");
        }

        self.write("REFERENCES ");
        self.write_qualified(&reference.table)?;
        if !reference.columns.is_empty() {
            self.write(" ");
            self.write_ident_list(&reference.columns);
        }

        match reference.match_type {
            MatchType::Regular => {}
            MatchType::Full => self.write(" MATCH FULL"),
            MatchType::Partial => self.write(" MATCH PARTIAL"),
        }

        if let Some(action) = reference.on_update {
            self.write(" ON UPDATE ");
            self.write(action.as_sql());
        }

        if let Some(action) = reference.on_delete {
            self.write(" ON DELETE ");
            self.write(action.as_sql());
        }
        self.render_extensions("ReferenceConstraint", &reference.extensions)
    }

    /// `DEFAULT <option>`
    pub fn render_default(&mut self, default: &DefaultOption) -> RenderResult<()> {
        self.write("DEFAULT ");
        match default {
            DefaultOption::Literal(lit) => return self.render_literal(lit),
            DefaultOption::CurrentDate => self.write("CURRENT_DATE"),
            DefaultOption::CurrentTime(precision) => {
                self.write("CURRENT_TIME");
                self.write_precision(*precision);
            }
            DefaultOption::CurrentTimestamp(precision) => {
                self.write("CURRENT_TIMESTAMP");
                self.write_precision(*precision);
            }
            DefaultOption::User => self.write("USER"),
            DefaultOption::CurrentUser => self.write("CURRENT_USER"),
            DefaultOption::SessionUser => self.write("SESSION_USER"),
            DefaultOption::SystemUser => self.write("SYSTEM_USER"),
            DefaultOption::Null => self.write("NULL"),
        }
        Ok(())
    }

    fn write_precision(&mut self, precision: Option<u32>) {
        if let Some(p) = precision {
            self.write(&format!("({})", p));
        }
    }

    // =========================================================================
    // Privileges
    // =========================================================================

    fn render_privileges(&mut self, privileges: &Option<Vec<Privilege>>) {
        match privileges {
            None => self.write("ALL PRIVILEGES"),
            Some(privileges) => {
                for (i, privilege) in privileges.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.write(privilege.keyword());
                    if let Some(columns) = privilege.columns() {
                        self.write(" ");
                        self.write_ident_list(columns);
                    }
                }
            }
        }
    }

    fn render_grantees(&mut self, grantees: &Option<Vec<Ident>>) {
        match grantees {
            None => self.write("PUBLIC"),
            Some(grantees) => {
                for (i, grantee) in grantees.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.write_ident(grantee);
                }
            }
        }
    }

    fn render_privilege_target(
        &mut self,
        kind: ObjectKind,
        object: &QualifiedIdent,
    ) -> RenderResult<()> {
        self.write(" ON ");
        self.write(kind.as_sql());
        self.write(" ");
        self.write_qualified(object)
    }

    fn render_grant(&mut self, grant: &GrantStatement) -> RenderResult<()> {
        self.write("GRANT ");
        self.render_privileges(&grant.privileges);
        self.render_privilege_target(grant.object_kind, &grant.object)?;
        self.write(" TO ");
        self.render_grantees(&grant.grantees);
        if grant.grant_option {
            self.write(" WITH GRANT OPTION");
        }
        self.render_extensions("GrantStatement", &grant.extensions)
    }

    fn render_revoke(&mut self, revoke: &RevokeStatement) -> RenderResult<()> {
        self.write("REVOKE ");
        if revoke.grant_option {
            self.write("GRANT OPTION FOR ");
        }
        self.render_privileges(&revoke.privileges);
        self.render_privilege_target(revoke.object_kind, &revoke.object)?;
        self.write(" FROM ");
        self.render_grantees(&revoke.grantees);
        self.write(" ");
        self.write(revoke.behavior.as_sql());
        self.render_extensions("RevokeStatement", &revoke.extensions)
    }

    // =========================================================================
    // Schema manipulation
    // =========================================================================

    fn render_alter_table(&mut self, alter: &AlterTable) -> RenderResult<()> {
        self.write("ALTER TABLE ");
        self.write_qualified(&alter.name)?;
        self.write(" ");

        match &alter.action {
            AlterTableAction::AddColumn(column) => {
                self.write("ADD COLUMN ");
                self.render_column_definition(column)?;
            }
            AlterTableAction::AlterColumn { column, action } => {
                self.write("ALTER COLUMN ");
                self.write_ident(column);
                match action {
                    AlterColumnAction::SetDefault(default) => {
                        self.write(" SET ");
                        self.render_default(default)?;
                    }
                    AlterColumnAction::DropDefault => self.write(" DROP DEFAULT"),
                }
            }
            AlterTableAction::DropColumn { column, behavior } => {
                self.write("DROP COLUMN ");
                self.write_ident(column);
                self.write(" ");
                self.write(behavior.as_sql());
            }
            AlterTableAction::AddConstraint(constraint) => {
                self.write("ADD ");
                constraint.render(self)?;
            }
            AlterTableAction::DropConstraint { name, behavior } => {
                self.write("DROP CONSTRAINT ");
                self.write_ident(name);
                self.write(" ");
                self.write(behavior.as_sql());
            }
        }

        self.render_extensions("AlterTable", &alter.extensions)
    }

    fn render_alter_domain(&mut self, alter: &AlterDomain) -> RenderResult<()> {
        self.write("ALTER DOMAIN ");
        self.write_qualified(&alter.name)?;
        self.write(" ");

        match &alter.action {
            AlterDomainAction::SetDefault(default) => {
                self.write("SET ");
                self.render_default(default)?;
            }
            AlterDomainAction::DropDefault => self.write("DROP DEFAULT"),
            AlterDomainAction::AddConstraint(constraint) => {
                self.write("ADD ");
                constraint.render(self)?;
            }
            AlterDomainAction::DropConstraint(name) => {
                self.write("DROP CONSTRAINT ");
                self.write_ident(name);
            }
        }

        self.render_extensions("AlterDomain", &alter.extensions)
    }

    fn render_drop(&mut self, drop: &DropStatement) -> RenderResult<()> {
        self.write("DROP ");
        self.write(drop.kind.as_sql());
        self.write(" ");
        self.write_qualified(&drop.name)?;
        self.write(" ");
        self.write(drop.behavior.as_sql());
        self.render_extensions("Drop", &drop.extensions)
    }

    // =========================================================================
    // Data manipulation
    // =========================================================================

    fn render_value(&mut self, value: &ValueOrDefault) -> RenderResult<()> {
        match value {
            ValueOrDefault::Value(expr) => self.render_expr(expr),
            ValueOrDefault::Default => {
                self.write("DEFAULT");
                Ok(())
            }
        }
    }

    fn render_insert(&mut self, stmt: &InsertStmt) -> RenderResult<()> {
        self.write("INSERT INTO ");
        self.write_qualified(&stmt.table)?;

        if !stmt.columns.is_empty() {
            self.write(" ");
            self.write_ident_list(&stmt.columns);
        }

        match &stmt.values {
            InsertValues::Values(rows) => {
                self.write(" VALUES ");
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.write("(");
                    for (j, value) in row.iter().enumerate() {
                        if j > 0 {
                            self.write(", ");
                        }
                        self.render_value(value)?;
                    }
                    self.write(")");
                }
            }
            InsertValues::Query(query) => {
                self.write(" ");
                self.render_query(query)?;
            }
            InsertValues::DefaultValues => {
                self.write(" DEFAULT VALUES");
            }
        }

        self.render_extensions("Insert", &stmt.extensions)
    }

    fn render_update(&mut self, stmt: &UpdateStmt) -> RenderResult<()> {
        self.write("UPDATE ");
        self.write_qualified(&stmt.table)?;

        self.write(" SET ");
        for (i, (col, value)) in stmt.assignments.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write_ident(col);
            self.write(" = ");
            self.render_value(value)?;
        }

        self.render_where(&stmt.where_clause)?;
        self.render_extensions("Update", &stmt.extensions)
    }

    fn render_delete(&mut self, stmt: &DeleteStmt) -> RenderResult<()> {
        self.write("DELETE FROM ");
        self.write_qualified(&stmt.table)?;
        self.render_where(&stmt.where_clause)?;
        self.render_extensions("Delete", &stmt.extensions)
    }

    fn render_where(&mut self, where_clause: &Option<Expr>) -> RenderResult<()> {
        if let Some(where_clause) = where_clause {
            self.write(" WHERE ");
            self.render_expr(where_clause)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;
    use crate::error::RenderError;
    use pretty_assertions::assert_eq;

    fn sql(stmt: impl Into<Statement>) -> String {
        render(&stmt.into()).unwrap()
    }

    #[test]
    fn test_render_table_constraints() {
        let table = TableDefinition::new(
            "orders",
            vec![
                ColumnDefinition::new("id", DataType::Integer).not_null(),
                ColumnDefinition::new("customer_id", DataType::Integer),
            ],
        )
        .with_constraint(ConstraintDefinition::new(TableConstraint::Unique(
            UniqueConstraint::primary_key(idents(["id"])),
        )))
        .with_constraint(ConstraintDefinition::named(
            "fk_customer",
            TableConstraint::References(
                ReferenceConstraint::foreign_key(idents(["customer_id"]), "customers", idents(["id"]))
                    .with_match(MatchType::Full)
                    .on_delete(ReferentialAction::Cascade),
            ),
        ));

        assert_eq!(
            sql(table),
            "CREATE TABLE \"orders\" (\"id\" INTEGER NOT NULL, \"customer_id\" INTEGER, PRIMARY KEY (\"id\"), \
             CONSTRAINT \"fk_customer\" FOREIGN KEY (\"customer_id\") REFERENCES \"customers\" (\"id\") MATCH FULL ON DELETE CASCADE)"
        );
    }

    #[test]
    fn test_render_column_reference_and_check() {
        let column = ColumnDefinition::new("dept", DataType::BigInt)
            .with(ColumnConstraint::References(
                ReferenceConstraint::new("departments", vec![]).on_update(ReferentialAction::SetNull),
            ))
            .with(ColumnConstraint::Check(CheckConstraint::new(
                Expr::ident("dept").gt(Expr::int(0)),
            )));

        let renderer = Renderer::default();
        let rendered = renderer.render_node("ColumnDefinition", &column).unwrap();
        assert_eq!(
            rendered.sql,
            "\"dept\" BIGINT REFERENCES \"departments\" ON UPDATE SET NULL CHECK (\"dept\" > 0)"
        );
    }

    #[test]
    fn test_render_defaults() {
        let cases = vec![
            (DefaultOption::CurrentDate, "DEFAULT CURRENT_DATE"),
            (DefaultOption::CurrentTime(None), "DEFAULT CURRENT_TIME"),
            (DefaultOption::CurrentTimestamp(Some(6)), "DEFAULT CURRENT_TIMESTAMP(6)"),
            (DefaultOption::SessionUser, "DEFAULT SESSION_USER"),
            (DefaultOption::Literal(Literal::string("n/a")), "DEFAULT 'n/a'"),
            (DefaultOption::Null, "DEFAULT NULL"),
        ];
        let renderer = Renderer::default();
        for (default, expected) in cases {
            assert_eq!(renderer.render_node("DefaultOption", &default).unwrap().sql, expected);
        }
    }

    #[test]
    fn test_render_schema_definition() {
        let schema = SchemaDefinition::new("hr")
            .with_authorization("admin")
            .with_character_set("utf8")
            .with_element(TableDefinition::new(
                "t",
                vec![ColumnDefinition::new("id", DataType::Integer)],
            ));

        assert_eq!(
            sql(schema),
            "CREATE SCHEMA \"hr\" AUTHORIZATION \"admin\" DEFAULT CHARACTER SET \"utf8\" CREATE TABLE \"t\" (\"id\" INTEGER)"
        );
    }

    #[test]
    fn test_render_domain() {
        let domain = DomainDefinition::new("positive_int", DataType::Integer)
            .with_default(DefaultOption::Literal(Literal::number(1)))
            .with_constraint(ConstraintDefinition::named(
                "positive",
                CheckConstraint::new(Expr::ident("VALUE").gt(Expr::int(0))),
            ))
            .with_collation("c");

        assert_eq!(
            sql(domain),
            "CREATE DOMAIN \"positive_int\" AS INTEGER DEFAULT 1 CONSTRAINT \"positive\" CHECK (\"VALUE\" > 0) COLLATE \"c\""
        );
    }

    #[test]
    fn test_render_grant_and_revoke() {
        let grant = GrantStatement::new(
            Some(vec![Privilege::Select, Privilege::Update(Some(idents(["name", "age"])))]),
            ObjectKind::Table,
            "employees",
        )
        .to(idents(["alice", "bob"]))
        .with_grant_option();
        assert_eq!(
            sql(grant),
            "GRANT SELECT, UPDATE (\"name\", \"age\") ON TABLE \"employees\" TO \"alice\", \"bob\" WITH GRANT OPTION"
        );

        let grant_all = GrantStatement::new(None, ObjectKind::Domain, "money");
        assert_eq!(sql(grant_all), "GRANT ALL PRIVILEGES ON DOMAIN \"money\" TO PUBLIC");

        let revoke = RevokeStatement::new(
            Some(vec![Privilege::Insert(None)]),
            ObjectKind::Table,
            "employees",
            DropBehavior::Cascade,
        )
        .from(idents(["alice"]))
        .grant_option_for();
        assert_eq!(
            sql(revoke),
            "REVOKE GRANT OPTION FOR INSERT ON TABLE \"employees\" FROM \"alice\" CASCADE"
        );
    }

    #[test]
    fn test_render_alter_and_drop() {
        let add = AlterTable::new(
            "employees",
            AlterTableAction::AddColumn(ColumnDefinition::new("email", DataType::varchar(255)).unique()),
        );
        assert_eq!(
            sql(add),
            "ALTER TABLE \"employees\" ADD COLUMN \"email\" VARCHAR(255) UNIQUE"
        );

        let set_default = AlterTable::new(
            "employees",
            AlterTableAction::AlterColumn {
                column: Ident::new("age"),
                action: AlterColumnAction::SetDefault(DefaultOption::Literal(Literal::number(18))),
            },
        );
        assert_eq!(
            sql(set_default),
            "ALTER TABLE \"employees\" ALTER COLUMN \"age\" SET DEFAULT 18"
        );

        let drop_constraint = AlterTable::new(
            "employees",
            AlterTableAction::DropConstraint {
                name: Ident::new("fk"),
                behavior: DropBehavior::Restrict,
            },
        );
        assert_eq!(
            sql(drop_constraint),
            "ALTER TABLE \"employees\" DROP CONSTRAINT \"fk\" RESTRICT"
        );

        let domain = AlterDomain::new("money", AlterDomainAction::DropDefault);
        assert_eq!(sql(domain), "ALTER DOMAIN \"money\" DROP DEFAULT");

        let drop = DropStatement::new(DropKind::Schema, "hr", DropBehavior::Cascade);
        assert_eq!(sql(drop), "DROP SCHEMA \"hr\" CASCADE");
    }

    #[test]
    fn test_render_dml() {
        let insert = InsertStmt::new(
            "t",
            idents(["a", "b"]),
            InsertValues::Values(vec![vec![Expr::int(1).into(), ValueOrDefault::Default]]),
        );
        assert_eq!(sql(insert), "INSERT INTO \"t\" (\"a\", \"b\") VALUES (1, DEFAULT)");

        let insert_default = InsertStmt::new("t", vec![], InsertValues::DefaultValues);
        assert_eq!(sql(insert_default), "INSERT INTO \"t\" DEFAULT VALUES");

        let update = UpdateStmt::new(
            "t",
            vec![
                (Ident::new("a"), Expr::int(1).into()),
                (Ident::new("b"), ValueOrDefault::Default),
            ],
        )
        .with_where(Expr::ident("id").eq(Expr::int(7)));
        assert_eq!(
            sql(update),
            "UPDATE \"t\" SET \"a\" = 1, \"b\" = DEFAULT WHERE \"id\" = 7"
        );

        let delete = DeleteStmt::new("t").with_where(Expr::is_null(Expr::ident("a")));
        assert_eq!(sql(delete), "DELETE FROM \"t\" WHERE \"a\" IS NULL");
    }

    #[test]
    fn test_insert_params_span_rows() {
        let insert = InsertStmt::new(
            "t",
            idents(["a"]),
            InsertValues::Values(vec![vec![Expr::int(1).into()], vec![Expr::int(2).into()]]),
        );
        let rendered = render_with_params(&insert.into()).unwrap();
        assert_eq!(rendered.sql, "INSERT INTO \"t\" (\"a\") VALUES ($1), ($2)");
        assert_eq!(rendered.params, vec![ParamValue::Integer(1), ParamValue::Integer(2)]);
    }

    #[test]
    fn test_ddl_params_mode() {
        let table = TableDefinition::new(
            "t",
            vec![
                ColumnDefinition::new("a", DataType::Integer)
                    .with_default(DefaultOption::Literal(Literal::number(5)))
                    .with(ColumnConstraint::Check(CheckConstraint::new(
                        Expr::ident("a").gt(Expr::int(0)),
                    ))),
                ColumnDefinition::new("b", DataType::Date).with_default(DefaultOption::CurrentDate),
            ],
        );
        let rendered = render_with_params(&table.into()).unwrap();
        assert_eq!(
            rendered.sql,
            "CREATE TABLE \"t\" (\"a\" INTEGER DEFAULT $1 CHECK (\"a\" > $2), \"b\" DATE DEFAULT CURRENT_DATE)"
        );
        assert_eq!(rendered.params, vec![ParamValue::Integer(5), ParamValue::Integer(0)]);
    }

    #[test]
    fn test_render_remaining_alter_actions() {
        let drop_column = AlterTable::new(
            "employees",
            AlterTableAction::DropColumn {
                column: Ident::new("age"),
                behavior: DropBehavior::Cascade,
            },
        );
        assert_eq!(sql(drop_column), "ALTER TABLE \"employees\" DROP COLUMN \"age\" CASCADE");

        let drop_default = AlterTable::new(
            "employees",
            AlterTableAction::AlterColumn {
                column: Ident::new("age"),
                action: AlterColumnAction::DropDefault,
            },
        );
        assert_eq!(
            sql(drop_default),
            "ALTER TABLE \"employees\" ALTER COLUMN \"age\" DROP DEFAULT"
        );

        let add_table_constraint = AlterTable::new(
            "employees",
            AlterTableAction::AddConstraint(ConstraintDefinition::named(
                "uq_name",
                TableConstraint::Unique(UniqueConstraint::unique(idents(["name"]))),
            )),
        );
        assert_eq!(
            sql(add_table_constraint),
            "ALTER TABLE \"employees\" ADD CONSTRAINT \"uq_name\" UNIQUE (\"name\")"
        );

        let set_default = AlterDomain::new(
            "money",
            AlterDomainAction::SetDefault(DefaultOption::Literal(Literal::number(0))),
        );
        assert_eq!(sql(set_default), "ALTER DOMAIN \"money\" SET DEFAULT 0");

        let add_constraint = AlterDomain::new(
            "money",
            AlterDomainAction::AddConstraint(
                ConstraintDefinition::named(
                    "non_negative",
                    CheckConstraint::new(Expr::ident("VALUE").gt(Expr::int(-1))),
                )
                .with_check_time(ConstraintCheckTime::new(false, false)),
            ),
        );
        assert_eq!(
            sql(add_constraint),
            "ALTER DOMAIN \"money\" ADD CONSTRAINT \"non_negative\" CHECK (\"VALUE\" > -1) INITIALLY IMMEDIATE NOT DEFERRABLE"
        );

        let drop_constraint = AlterDomain::new(
            "money",
            AlterDomainAction::DropConstraint(Ident::new("non_negative")),
        );
        assert_eq!(
            sql(drop_constraint),
            "ALTER DOMAIN \"money\" DROP CONSTRAINT \"non_negative\""
        );
    }

    #[test]
    fn test_render_schema_elements() {
        let schema = SchemaDefinition::new("hr")
            .with_element(DomainDefinition::new("age", DataType::SmallInt))
            .with_element(ViewDefinition::new(
                "v",
                Select::star().with_from("t").into_query(),
            ))
            .with_element(GrantStatement::new(
                Some(vec![Privilege::Usage]),
                ObjectKind::Domain,
                "age",
            ));
        assert_eq!(
            sql(schema),
            "CREATE SCHEMA \"hr\" CREATE DOMAIN \"age\" AS SMALLINT CREATE VIEW \"v\" AS SELECT * FROM \"t\" \
             GRANT USAGE ON DOMAIN \"age\" TO PUBLIC"
        );
    }

    #[test]
    fn test_constraint_extension_slots() {
        let registry = ExtensionRegistry::new()
            .with_fn("pg.using_index", |_, r| {
                r.write("USING INDEX TABLESPACE \"fast\"");
                Ok(())
            })
            .with_fn("pg.not_valid", |_, r| {
                r.write("NOT VALID");
                Ok(())
            });
        let renderer = Renderer::default().with_extensions(registry);

        let table = TableDefinition::new(
            "orders",
            vec![ColumnDefinition::new("customer_id", DataType::Integer).with(
                ColumnConstraint::References(
                    ReferenceConstraint::new("customers", vec![])
                        .with_extensions(DialectNode::new("pg.not_valid", ())),
                ),
            )],
        )
        .with_constraint(
            ConstraintDefinition::new(TableConstraint::Unique(
                UniqueConstraint::primary_key(idents(["customer_id"]))
                    .with_extensions(DialectNode::new("pg.using_index", ())),
            ))
            .with_check_time(
                ConstraintCheckTime::new(true, true)
                    .with_extensions(DialectNode::new("pg.not_valid", ())),
            ),
        );
        assert_eq!(
            renderer.render_statement(&table.into()).unwrap().sql,
            "CREATE TABLE \"orders\" (\"customer_id\" INTEGER REFERENCES \"customers\" NOT VALID, \
             PRIMARY KEY (\"customer_id\") USING INDEX TABLESPACE \"fast\" INITIALLY DEFERRED DEFERRABLE NOT VALID)"
        );
    }

    #[test]
    fn test_constraint_extension_slots_without_handler() {
        let unknown = || DialectNode::new("pg.unknown", ());
        let node_of = |column: ColumnDefinition| {
            match Renderer::default().render_node("ColumnDefinition", &column) {
                Err(RenderError::UnsupportedExtension { node, .. }) => node,
                other => panic!("expected UnsupportedExtension, got {:?}", other),
            }
        };

        let unique = ColumnDefinition::new("a", DataType::Integer).with(ColumnConstraint::Unique(
            UniqueConstraint::unique(vec![]).with_extensions(unknown()),
        ));
        assert_eq!(node_of(unique), "UniqueConstraint");

        let reference = ColumnDefinition::new("a", DataType::Integer).with(
            ColumnConstraint::References(
                ReferenceConstraint::new("b", vec![]).with_extensions(unknown()),
            ),
        );
        assert_eq!(node_of(reference), "ReferenceConstraint");

        let check_time = ColumnDefinition::new("a", DataType::Integer).with_constraint(
            ConstraintDefinition::new(ColumnConstraint::NotNull)
                .with_check_time(ConstraintCheckTime::new(false, true).with_extensions(unknown())),
        );
        assert_eq!(node_of(check_time), "ConstraintCheckTime");
    }
}
