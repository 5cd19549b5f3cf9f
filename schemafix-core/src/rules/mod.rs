//! Built-in rewrite rules - UUID keys to bigint identity keys
//!
//! The rules form a fixed, ordered table applied top to bottom to every
//! file. Order is load-bearing:
//!
//! 1. The primary-key rule runs before the users-reference rule.
//! 2. The users-reference rule runs before the constraint removal, which
//!    deletes `$table->foreign(...)` lines that would otherwise dangle
//!    next to the inline `constrained('users')` it just produced.
//! 3. The nullable rule runs before the catch-all reference rule.
//!
//! IMPORTANT: when extending the users-referencing column list, add the
//! name to `USER_REF_COLUMNS` only; both rules that use it are built from
//! that constant.

use crate::domain::result::Result;
use crate::domain::rule::RewriteRule;

/// Column names that conventionally reference the `users` table
pub const USER_REF_COLUMNS: &[&str] = &[
    "user_id",
    "author_id",
    "creator_id",
    "uploader_id",
    "uploaded_by",
    "created_by",
    "grader_id",
    "graded_by",
    "verified_by",
    "actor_id",
    "sender_id",
    "recipient_id",
    "organizer_id",
    "host_id",
    "requester_id",
    "owner_id",
    "assignee_id",
    "assigned_to",
    "assigned_by",
];

/// Compile the built-in rule table, in application order
pub fn builtin_rules() -> Result<Vec<RewriteRule>> {
    let users = USER_REF_COLUMNS.join("|");

    Ok(vec![
        // uuid('id')->primary() becomes the bigint identity column
        RewriteRule::new(
            "uuid-primary-key",
            r"\$table->uuid\('id'\)->primary\(\);",
            "$$table->id();",
        )?,
        // uuid columns referencing users become inline foreign ids
        RewriteRule::new(
            "users-reference",
            &format!(r"\$table->uuid\('({users})'\);"),
            "$$table->foreignId('${1}')->constrained('users')->onDelete('cascade');",
        )?,
        // explicit users foreign keys are redundant after the inline form
        RewriteRule::new(
            "redundant-users-constraint",
            &format!(
                r"\s*\$table->foreign\('({users})'\)->references\('id'\)->on\('users'\)->onDelete\('cascade'\);"
            ),
            "",
        )?,
        // remaining nullable uuid columns become set-null foreign ids
        RewriteRule::new(
            "nullable-reference",
            r"\$table->uuid\('([^']+)'\)->nullable\(\);",
            "$$table->foreignId('${1}')->nullable()->constrained()->onDelete('set null');",
        )?,
        // remaining uuid columns become cascading foreign ids, unless an
        // explicit foreign() statement follows and still owns the reference
        RewriteRule::new_guarded(
            "remaining-reference",
            r"\$table->uuid\('([^']+)'\);",
            "$$table->foreignId('${1}')->constrained()->onDelete('cascade');",
            r"^\s*\$table->foreign",
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_all(text: &str) -> String {
        builtin_rules()
            .unwrap()
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc))
    }

    #[test]
    fn test_primary_key_becomes_identity() {
        let out = apply_all("            $table->uuid('id')->primary();\n");
        assert_eq!(out, "            $table->id();\n");
    }

    #[test]
    fn test_users_reference_becomes_inline_foreign_id() {
        let out = apply_all("$table->uuid('author_id');\n");
        assert_eq!(
            out,
            "$table->foreignId('author_id')->constrained('users')->onDelete('cascade');\n"
        );
    }

    #[test]
    fn test_every_listed_column_is_covered() {
        for column in USER_REF_COLUMNS {
            let out = apply_all(&format!("$table->uuid('{column}');\n"));
            assert!(
                out.contains(&format!("foreignId('{column}')->constrained('users')")),
                "column {column} was not rewritten: {out}"
            );
        }
    }

    #[test]
    fn test_redundant_constraint_is_removed_with_leading_whitespace() {
        let input = concat!(
            "            $table->uuid('author_id');\n",
            "            $table->foreign('author_id')->references('id')->on('users')->onDelete('cascade');\n",
            "            $table->string('title');\n",
        );
        let out = apply_all(input);
        assert_eq!(
            out,
            concat!(
                "            $table->foreignId('author_id')->constrained('users')->onDelete('cascade');\n",
                "            $table->string('title');\n",
            )
        );
    }

    #[test]
    fn test_nullable_uuid_becomes_set_null_reference() {
        let out = apply_all("$table->uuid('thumbnail_id')->nullable();\n");
        assert_eq!(
            out,
            "$table->foreignId('thumbnail_id')->nullable()->constrained()->onDelete('set null');\n"
        );
    }

    #[test]
    fn test_unlisted_uuid_becomes_cascading_reference() {
        let out = apply_all("$table->uuid('course_id');\n");
        assert_eq!(
            out,
            "$table->foreignId('course_id')->constrained()->onDelete('cascade');\n"
        );
    }

    #[test]
    fn test_unlisted_uuid_with_explicit_foreign_is_left_alone() {
        let input = concat!(
            "$table->uuid('course_id');\n",
            "$table->foreign('course_id')->references('id')->on('courses');\n",
        );
        assert_eq!(apply_all(input), input);
    }

    #[test]
    fn test_non_uuid_lines_pass_through() {
        let input = concat!(
            "$table->string('title');\n",
            "$table->timestamps();\n",
        );
        assert_eq!(apply_all(input), input);
    }

    #[test]
    fn test_rules_are_idempotent() {
        let input = concat!(
            "            $table->uuid('id')->primary();\n",
            "            $table->uuid('user_id');\n",
            "            $table->foreign('user_id')->references('id')->on('users')->onDelete('cascade');\n",
            "            $table->uuid('thumbnail_id')->nullable();\n",
            "            $table->uuid('course_id');\n",
        );
        let once = apply_all(input);
        let twice = apply_all(&once);
        assert_eq!(once, twice);
        // no rule output reintroduces the token the rules key on
        assert!(!once.contains("uuid("));
    }

    #[test]
    fn test_each_rule_ignores_its_own_output() {
        let rules = builtin_rules().unwrap();
        let rewritten = concat!(
            "$table->id();\n",
            "$table->foreignId('user_id')->constrained('users')->onDelete('cascade');\n",
            "$table->foreignId('thumbnail_id')->nullable()->constrained()->onDelete('set null');\n",
            "$table->foreignId('course_id')->constrained()->onDelete('cascade');\n",
        );
        for rule in &rules {
            assert_eq!(rule.apply(rewritten), rewritten, "rule {} re-matched", rule.name());
        }
    }
}
