use keel_core::{Dialect, Entity, FieldDef, PrimaryKeyType, TableDef};
use rust_decimal::Decimal;
use std::sync::{
    Arc, LazyLock,
    atomic::{AtomicUsize, Ordering},
};
use time::OffsetDateTime;
use tokio::sync::{Barrier, Mutex};
use uuid::Uuid;

static MUTEX: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
/// Reflections of `CountedTrade`, only `trade_concurrent` asks for it and only under `MUTEX`.
static REFLECTIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Clone)]
pub struct TradeExecution {
    pub trade: u64,
    pub order: Uuid,
    pub symbol: String,
    pub price: Decimal,
    pub quantity: u32,
    pub execution_time: OffsetDateTime,
    pub currency: Option<String>,
    pub is_internalized: bool,
    pub venue: Option<String>,
    pub metadata: Option<Box<[u8]>>,
}

impl Entity for TradeExecution {
    fn table_def() -> TableDef {
        TableDef::new("trade_execution")
            .schema("trading")
            .field(
                FieldDef::discover::<u64>("trade_id")
                    .primary_key(PrimaryKeyType::PartOfPrimaryKey),
            )
            .field(
                FieldDef::discover::<Uuid>("order_id")
                    .primary_key(PrimaryKeyType::PartOfPrimaryKey),
            )
            .field(FieldDef::discover::<String>("symbol"))
            .field(FieldDef::discover::<Decimal>("price"))
            .field(FieldDef::discover::<u32>("quantity"))
            .field(FieldDef::discover::<OffsetDateTime>("execution_time"))
            .field(FieldDef::discover::<Option<String>>("currency"))
            .field(FieldDef::discover::<bool>("is_internalized"))
            .field(FieldDef::discover::<Option<String>>("venue"))
            .field(FieldDef::discover::<Option<Box<[u8]>>>("metadata"))
    }
}

/// Same layout as `TradeExecution`, counts how many times it gets reflected.
struct CountedTrade;

impl Entity for CountedTrade {
    fn table_def() -> TableDef {
        REFLECTIONS.fetch_add(1, Ordering::Relaxed);
        let mut table = TradeExecution::table_def();
        table.name = "counted_trade".into();
        table
    }
}

/// Many tasks ask for the same table at once, all of them must get the same descriptor.
pub async fn trade_concurrent<D: Dialect + 'static>(dialect: Arc<D>) {
    const TASKS: usize = 16;
    let _lock = MUTEX.lock().await;
    let before = REFLECTIONS.load(Ordering::Relaxed);
    let barrier = Arc::new(Barrier::new(TASKS));
    let tasks = (0..TASKS)
        .map(|_| {
            let dialect = dialect.clone();
            let barrier = barrier.clone();
            tokio::spawn(async move {
                barrier.wait().await;
                (
                    dialect.table::<TradeExecution>(),
                    dialect.table::<CountedTrade>(),
                )
            })
        })
        .collect::<Vec<_>>();
    let mut tables = Vec::with_capacity(TASKS);
    for task in tasks {
        tables.push(task.await.expect("Task panicked"));
    }
    let canonical = dialect
        .tables()
        .get::<TradeExecution>()
        .expect("TradeExecution must be registered");
    let counted = dialect
        .tables()
        .get::<CountedTrade>()
        .expect("CountedTrade must be registered");
    for (trade, counted_trade) in &tables {
        assert!(Arc::ptr_eq(trade, &canonical));
        assert!(Arc::ptr_eq(counted_trade, &counted));
    }
    assert_eq!(counted.fields, canonical.fields);
    assert_eq!(canonical.primary_key().count(), 2);
    assert!(
        canonical
            .fields
            .iter()
            .all(|v| dialect.normalize_type(&v.sql_type) == v.sql_type)
    );

    // Lookups after publication never reflect again
    let reflections = REFLECTIONS.load(Ordering::Relaxed);
    assert!((1..=TASKS).contains(&(reflections - before)));
    for _ in 0..TASKS {
        assert!(Arc::ptr_eq(&dialect.table::<TradeExecution>(), &canonical));
        assert!(Arc::ptr_eq(&dialect.table::<CountedTrade>(), &counted));
    }
    assert_eq!(REFLECTIONS.load(Ordering::Relaxed), reflections);
}
