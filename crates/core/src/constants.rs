use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Storage key holding the JSON-serialized position list
pub const SNAPSHOT_POSITIONS_KEY: &str = "dcaStocks";

/// Storage key holding the snapshot write time (milliseconds since epoch)
pub const SNAPSHOT_TIMESTAMP_KEY: &str = "dcaStocksTimestamp";

/// How long a persisted snapshot stays valid before defaults are reseeded
pub const DEFAULT_SNAPSHOT_TTL_DAYS: i64 = 30;

/// Monthly amount available for new contributions
pub const DEFAULT_MONTHLY_BUDGET: Decimal = dec!(29000);

/// Cash held back as a debt reserve (30% of the pot)
pub const DEFAULT_DEBT_RESERVE: Decimal = dec!(150000);

/// The only trend label the highlight rule recognizes
pub const FALLING_TREND: &str = "Falling";

/// Progress (in percent) below which a falling position is highlighted
pub const HIGHLIGHT_PROGRESS_THRESHOLD: Decimal = dec!(50);

/// Largest amount or ratio the add form accepts
pub const MAX_FORM_AMOUNT: Decimal = dec!(1_000_000_000_000_000);

/// Decimal places used when reporting progress
pub const PROGRESS_DECIMAL_PLACES: u32 = 1;
