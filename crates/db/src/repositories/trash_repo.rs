//! Repository for cross-table trash / bin operations.
//!
//! Provides a unified view of soft-deleted rows across the entity tables,
//! plus bulk and single-item purge (hard delete) and the parent-status
//! check the restore flow needs.

use causa_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::SqlitePool;

/// Known entity types that support soft-delete and appear in the bin.
const KNOWN_ENTITY_TYPES: &[&str] = &[
    "clients",
    "processes",
    "documents",
    "accounting_types",
    "accounting_entries",
    "events",
    "actuaciones",
    "liquidators",
    "robot_searches",
];

/// A single soft-deleted item surfaced in the trash list.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TrashedItem {
    pub id: DbId,
    pub entity_type: String,
    pub name_or_label: Option<String>,
    pub deleted_at: Timestamp,
}

/// Summary returned by [`TrashRepo::list_trashed`].
#[derive(Debug, Clone, Serialize)]
pub struct TrashSummary {
    pub items: Vec<TrashedItem>,
    pub total_count: i64,
}

/// Preview of what a purge-all would remove.
#[derive(Debug, Clone, Serialize)]
pub struct PurgePreview {
    pub counts_by_type: Vec<PurgeCount>,
    pub total_count: i64,
    pub estimated_bytes: Option<i64>,
}

/// Per-entity-type count of soft-deleted rows.
#[derive(Debug, Clone, Serialize)]
pub struct PurgeCount {
    pub entity_type: String,
    pub count: i64,
}

/// Returns `true` if `entity_type` is one of the known types.
pub fn is_known_entity_type(entity_type: &str) -> bool {
    KNOWN_ENTITY_TYPES.contains(&entity_type)
}

/// Provides cross-table trash operations.
pub struct TrashRepo;

impl TrashRepo {
    // ── Listing ───────────────────────────────────────────────────────

    /// List all soft-deleted items across entity tables.
    ///
    /// When `entity_type` is `Some`, only that single table is queried.
    /// Results are ordered by `deleted_at DESC`.
    pub async fn list_trashed(
        pool: &SqlitePool,
        entity_type: Option<&str>,
    ) -> Result<TrashSummary, sqlx::Error> {
        let items = match entity_type {
            Some(et) => Self::list_trashed_single(pool, et).await?,
            None => Self::list_trashed_all(pool).await?,
        };
        let total_count = items.len() as i64;
        Ok(TrashSummary { items, total_count })
    }

    /// Query a single entity table for soft-deleted rows.
    async fn list_trashed_single(
        pool: &SqlitePool,
        entity_type: &str,
    ) -> Result<Vec<TrashedItem>, sqlx::Error> {
        let name_expr = name_expr_for(entity_type);
        let sql = format!(
            "SELECT id, '{entity_type}' AS entity_type, {name_expr} AS name_or_label, \
             deleted_at FROM {entity_type} WHERE deleted_at IS NOT NULL \
             ORDER BY deleted_at DESC"
        );
        sqlx::query_as::<_, TrashedItem>(&sql).fetch_all(pool).await
    }

    /// UNION ALL across every entity table for soft-deleted rows.
    async fn list_trashed_all(pool: &SqlitePool) -> Result<Vec<TrashedItem>, sqlx::Error> {
        let unions: Vec<String> = KNOWN_ENTITY_TYPES
            .iter()
            .map(|et| {
                let name_expr = name_expr_for(et);
                format!(
                    "SELECT id, '{et}' AS entity_type, {name_expr} AS name_or_label, \
                     deleted_at FROM {et} WHERE deleted_at IS NOT NULL"
                )
            })
            .collect();
        let sql = format!("{} ORDER BY deleted_at DESC", unions.join(" UNION ALL "));
        sqlx::query_as::<_, TrashedItem>(&sql).fetch_all(pool).await
    }

    // ── Purge preview ─────────────────────────────────────────────────

    /// Preview what a purge-all would remove: counts per entity type and
    /// estimated bytes reclaimed from the document store.
    pub async fn purge_preview(pool: &SqlitePool) -> Result<PurgePreview, sqlx::Error> {
        let mut counts_by_type = Vec::new();
        let mut total_count: i64 = 0;

        for et in KNOWN_ENTITY_TYPES {
            let sql = format!("SELECT COUNT(*) FROM {et} WHERE deleted_at IS NOT NULL");
            let count: (i64,) = sqlx::query_as(&sql).fetch_one(pool).await?;
            if count.0 > 0 {
                counts_by_type.push(PurgeCount {
                    entity_type: (*et).to_string(),
                    count: count.0,
                });
                total_count += count.0;
            }
        }

        // Documents are the only file-bearing table.
        let bytes: (i64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(size_bytes), 0) FROM documents WHERE deleted_at IS NOT NULL",
        )
        .fetch_one(pool)
        .await?;
        let estimated_bytes = if bytes.0 > 0 { Some(bytes.0) } else { None };

        Ok(PurgePreview {
            counts_by_type,
            total_count,
            estimated_bytes,
        })
    }

    // ── Purging ───────────────────────────────────────────────────────

    /// Hard-delete one soft-deleted row. Returns `true` if it was removed.
    ///
    /// `entity_type` must already be validated by the caller.
    pub async fn purge_one(
        pool: &SqlitePool,
        entity_type: &str,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let sql = format!("DELETE FROM {entity_type} WHERE id = $1 AND deleted_at IS NOT NULL");
        let result = sqlx::query(&sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete all soft-deleted rows across every entity table.
    ///
    /// Tables are purged parents-last so cascades never resurrect a count:
    /// deleting a trashed client also removes its processes' dependents
    /// regardless of their own trash state.
    pub async fn purge_all(pool: &SqlitePool) -> Result<(), sqlx::Error> {
        for et in KNOWN_ENTITY_TYPES.iter().rev() {
            let sql = format!("DELETE FROM {et} WHERE deleted_at IS NOT NULL");
            sqlx::query(&sql).execute(pool).await?;
        }
        Ok(())
    }

    // ── Parent checks ─────────────────────────────────────────────────

    /// If restoring `(entity_type, id)` would leave it dangling under a
    /// still-trashed parent, returns a message naming the parent to
    /// restore first. Returns `None` when the restore is safe.
    pub async fn check_parent_trashed(
        pool: &SqlitePool,
        entity_type: &str,
        id: DbId,
    ) -> Result<Option<String>, sqlx::Error> {
        let probe = match entity_type {
            "processes" => Some((
                "SELECT c.deleted_at IS NOT NULL FROM processes p \
                 JOIN clients c ON c.id = p.client_id WHERE p.id = $1",
                "client",
            )),
            "documents" | "accounting_entries" | "events" | "actuaciones" => {
                let sql = match entity_type {
                    "documents" => {
                        "SELECT p.deleted_at IS NOT NULL FROM documents d \
                         JOIN processes p ON p.id = d.process_id WHERE d.id = $1"
                    }
                    "accounting_entries" => {
                        "SELECT p.deleted_at IS NOT NULL FROM accounting_entries e \
                         JOIN processes p ON p.id = e.process_id WHERE e.id = $1"
                    }
                    "events" => {
                        "SELECT p.deleted_at IS NOT NULL FROM events e \
                         JOIN processes p ON p.id = e.process_id WHERE e.id = $1"
                    }
                    _ => {
                        "SELECT p.deleted_at IS NOT NULL FROM actuaciones a \
                         JOIN processes p ON p.id = a.process_id WHERE a.id = $1"
                    }
                };
                Some((sql, "process"))
            }
            "robot_searches" => Some((
                "SELECT p.deleted_at IS NOT NULL FROM robot_searches r \
                 JOIN processes p ON p.id = r.process_id WHERE r.id = $1",
                "process",
            )),
            // Clients, accounting types, and liquidators have no parent.
            _ => None,
        };

        let Some((sql, parent_name)) = probe else {
            return Ok(None);
        };

        // No row means either the item does not exist (caught later by the
        // restore itself) or, for robot searches, the parent is NULL.
        let parent_trashed: Option<(bool,)> =
            sqlx::query_as(sql).bind(id).fetch_optional(pool).await?;

        Ok(match parent_trashed {
            Some((true,)) => Some(format!(
                "Cannot restore: the owning {parent_name} is in the trash. Restore it first."
            )),
            _ => None,
        })
    }
}

/// Display expression per entity table for the trash listing.
fn name_expr_for(entity_type: &str) -> &'static str {
    match entity_type {
        "clients" => "full_name",
        "processes" => "docket_number",
        "documents" => "title",
        "accounting_types" => "name",
        "accounting_entries" => "concept",
        "events" => "title",
        "actuaciones" => "title",
        "liquidators" => "name",
        "robot_searches" => "docket_number",
        _ => "NULL",
    }
}
