mod serializer;
pub use serializer::{NetlifyRecord, NetlifyZone, RecordPatch};

mod zone_cache;
pub use zone_cache::ZoneCache;

mod restful_cli;
pub use restful_cli::{BASE_URL, NetlifyClient};

mod netlify;
pub use netlify::Auth;
pub use netlify::Netlify;
pub use netlify::NetlifyCfg;
