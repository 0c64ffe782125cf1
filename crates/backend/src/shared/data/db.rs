use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREATE_BUILDING_TABLE: &str = r#"
    CREATE TABLE a001_building (
        id TEXT PRIMARY KEY NOT NULL,
        code TEXT NOT NULL DEFAULT '',
        description TEXT NOT NULL,
        comment TEXT,
        owner_name TEXT NOT NULL,
        address TEXT NOT NULL DEFAULT '',
        city TEXT NOT NULL DEFAULT '',
        district TEXT NOT NULL DEFAULT '',
        guard_name TEXT,
        guard_phone TEXT,
        association_name TEXT,
        total_floors INTEGER NOT NULL DEFAULT 0,
        total_units INTEGER NOT NULL DEFAULT 0,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
"#;

const CREATE_UNIT_TABLE: &str = r#"
    CREATE TABLE a002_unit (
        id TEXT PRIMARY KEY NOT NULL,
        code TEXT NOT NULL,
        description TEXT NOT NULL,
        comment TEXT,
        building_ref TEXT NOT NULL,
        floor_number INTEGER NOT NULL,
        unit_type TEXT NOT NULL,
        facing TEXT NOT NULL,
        area REAL NOT NULL DEFAULT 0,
        rooms INTEGER NOT NULL DEFAULT 0,
        bathrooms INTEGER NOT NULL DEFAULT 0,
        living_rooms INTEGER NOT NULL DEFAULT 0,
        kitchens INTEGER NOT NULL DEFAULT 0,
        maid_room INTEGER NOT NULL DEFAULT 0,
        driver_room INTEGER NOT NULL DEFAULT 0,
        entrances INTEGER NOT NULL DEFAULT 1,
        ac_type TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'available',
        price REAL,
        unit_description TEXT,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
"#;

const CREATE_UNIT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_a002_unit_building_ref ON a002_unit (building_ref);";

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/app.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    create_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Database connection already initialized"))?;
    Ok(())
}

/// Таблицы зданий и единиц
pub(crate) async fn create_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    ensure_table(conn, "a001_building", CREATE_BUILDING_TABLE).await?;
    ensure_table(conn, "a002_unit", CREATE_UNIT_TABLE).await?;
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        CREATE_UNIT_INDEX.to_string(),
    ))
    .await?;
    Ok(())
}

/// Создать таблицу, если её ещё нет
async fn ensure_table(
    conn: &DatabaseConnection,
    table_name: &str,
    create_sql: &str,
) -> anyhow::Result<()> {
    let check_sql = format!(
        "SELECT name FROM sqlite_master WHERE type='table' AND name='{}';",
        table_name
    );
    let existing = conn
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, check_sql))
        .await?;

    if existing.is_empty() {
        tracing::info!("Creating {} table", table_name);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_sql.to_string(),
        ))
        .await?;
    } else {
        tracing::info!("Table {} already exists", table_name);
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
