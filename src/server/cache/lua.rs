//! Lua scripts for the RedisStore limiter implementation

// Lua script to atomically consume points from a limiter key
// The window only starts when the key does not exist yet, later calls keep its expiry
//
// KEYS[1]: limiter key
// ARGV[1]: points to consume
// ARGV[2]: window length in milliseconds
//
// Returns: { consumed points, milliseconds before the key expires }
pub static CONSUME_SCRIPT: &str = r#"
local key = KEYS[1]
local points = tonumber(ARGV[1])
local window_ms = tonumber(ARGV[2])

redis.call('SET', key, 0, 'NX', 'PX', window_ms)
local consumed = redis.call('INCRBY', key, points)
local pttl = redis.call('PTTL', key)

return { consumed, pttl }
"#;

// Lua script to add penalty points to an existing limiter key
// The expiry of the key is left unchanged
//
// KEYS[1]: limiter key
// ARGV[1]: penalty points
//
// Returns: { consumed points, milliseconds before the key expires }
pub static PENALTY_SCRIPT: &str = r#"
local key = KEYS[1]
local points = tonumber(ARGV[1])

local consumed = redis.call('INCRBY', key, points)
local pttl = redis.call('PTTL', key)

return { consumed, pttl }
"#;
