//! Symbol module - String interning for efficient identifier handling.
//!
//! This module provides the [`Symbol`] type, which is a compact (4-byte) handle
//! to an interned string. Symbols enable O(1) string comparison and reduce memory
//! usage when the same string appears multiple times in the compiler.
//!
//! # Overview
//!
//! The symbol interning system is a core component of the compiler, providing:
//!
//! - **Memory efficiency**: Each unique string is stored only once
//! - **Fast comparison**: Symbol comparison is O(1) via index comparison
//! - **Thread safety**: Safe to use across multiple threads concurrently
//! - **Stable handles**: Symbols remain valid for the program lifetime
//!
//! # Performance Characteristics
//!
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `Symbol::intern()` (hit) | O(1) | String already interned |
//! | `Symbol::intern()` (miss) | O(1) | New string allocation |
//! | `Symbol` comparison | O(1) | Index comparison only |
//! | `Symbol::as_str()` | O(n) | Linear search by index |
//! | `Symbol::eq_str()` | O(1) | Hash + pointer comparison |
//!
//! # Thread Safety
//!
//! The symbol interner is fully thread-safe (`Sync + Send`). Multiple threads
//! can intern strings concurrently without blocking each other, thanks to
//! DashMap's lock-free design.
//!
//! # Memory Model
//!
//! Interned strings are allocated on the heap with `'static` lifetime.
//! They are never deallocated, which is acceptable because:
//! 1. The compiler runs for a finite duration
//! 2. The total memory usage is bounded by source code size
//! 3. This avoids complex lifetime tracking
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```
//! use sharpc_util::symbol::Symbol;
//!
//! let s1 = Symbol::intern("hello");
//! let s2 = Symbol::intern("hello");
//! let s3 = Symbol::intern("world");
//!
//! assert_eq!(s1, s2);  // Same symbol for same string
//! assert_ne!(s1, s3);  // Different strings get different symbols
//! ```
//!
//! Using known keywords:
//!
//! ```
//! use sharpc_util::symbol::{Symbol, KW_CLASS, KW_PUBLIC};
//!
//! assert_eq!(KW_CLASS.as_str(), "class");
//! assert_eq!(KW_PUBLIC.as_str(), "public");
//! assert!(KW_CLASS.is_known());  // Pre-defined keyword
//! ```
//!
//! Thread-safe usage:
//!
//! ```
//! use sharpc_util::symbol::Symbol;
//! use std::thread;
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|i| {
//!         thread::spawn(move || {
//!             Symbol::intern(&format!("thread_{}", i))
//!         })
//!     })
//!     .collect();
//!
//! let symbols: Vec<_> = handles.into_iter()
//!     .map(|h| h.join().unwrap())
//!     .collect();
//!
//! // All symbols are unique
//! assert_eq!(symbols.len(), 4);
//! ```
//!
//! # Statistics and Profiling
//!
//! The interner tracks hit/miss statistics for performance profiling:
//!
//! ```
//! use sharpc_util::symbol::Symbol;
//!
//! let _ = Symbol::intern("test");
//! let _ = Symbol::intern("test");  // Hit
//!
//! let stats = Symbol::stats_struct();
//! println!("Hits: {}, Misses: {}", stats.hits, stats.misses);
//! ```

mod interner;

pub use interner::STRING_TABLE;

/// Statistics about the string interner for profiling
///
/// Provides insights into memory usage and efficiency of the interner.
///
/// # Fields
///
/// * `count` - Number of unique interned strings
/// * `capacity` - Hash map capacity (number of buckets)
/// * `collisions` - Number of hash collisions encountered
/// * `hits` - Number of times an already-interned string was requested
/// * `misses` - Number of times a new string was allocated
///
/// # Examples
///
/// ```
/// use sharpc_util::symbol::{Symbol, InternerStats};
///
/// let stats = Symbol::stats_struct();
/// println!("Interned {} strings", stats.count);
/// println!("Hit rate: {:.2}%", stats.hit_rate() * 100.0);
/// println!("Load factor: {:.2}", stats.load_factor());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct InternerStats {
    /// Number of interned strings
    pub count: usize,
    /// Hash map capacity (number of buckets)
    pub capacity: usize,
    /// Number of hash collisions encountered
    pub collisions: usize,
    /// Number of cache hits (string already interned)
    pub hits: usize,
    /// Number of cache misses (new string allocation)
    pub misses: usize,
}

impl InternerStats {
    /// Create new stats with the given values
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats::new(100, 256, 5, 80, 20);
    /// assert_eq!(stats.count, 100);
    /// assert_eq!(stats.hits, 80);
    /// ```
    pub const fn new(
        count: usize,
        capacity: usize,
        collisions: usize,
        hits: usize,
        misses: usize,
    ) -> Self {
        Self {
            count,
            capacity,
            collisions,
            hits,
            misses,
        }
    }

    /// Calculate the load factor (count / capacity)
    ///
    /// Returns 0.0 if capacity is 0.
    ///
    /// A load factor above 0.75 indicates the hash map may need resizing.
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats::new(100, 200, 0, 0, 0);
    /// assert_eq!(stats.load_factor(), 0.5);
    /// ```
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.count as f64 / self.capacity as f64
        }
    }

    /// Check if the interner is getting full (load factor > 0.75)
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats::new(100, 200, 0, 0, 0);
    /// assert!(!stats.is_near_capacity());
    ///
    /// let stats = InternerStats::new(100, 120, 0, 0, 0);
    /// assert!(stats.is_near_capacity());
    /// ```
    pub fn is_near_capacity(&self) -> bool {
        self.load_factor() > 0.75
    }

    /// Calculate the hit rate (hits / (hits + misses))
    ///
    /// Returns 0.0 if no lookups have been performed.
    ///
    /// A high hit rate (>0.9) indicates good interning efficiency.
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats::new(100, 200, 0, 90, 10);
    /// assert_eq!(stats.hit_rate(), 0.9);
    /// ```
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Get total number of interning operations
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats::new(100, 200, 0, 90, 10);
    /// assert_eq!(stats.total_operations(), 100);
    /// ```
    pub fn total_operations(&self) -> usize {
        self.hits + self.misses
    }

    /// Get memory efficiency ratio (unique strings / total operations)
    ///
    /// Lower values indicate better deduplication.
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats::new(10, 100, 0, 90, 10);
    /// assert_eq!(stats.memory_efficiency(), 0.1);  // 10 unique / 100 ops
    /// ```
    pub fn memory_efficiency(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.count as f64 / self.total_operations() as f64
        }
    }
}

/// Symbol - An interned string identifier
///
/// A Symbol is a compact (4-byte) handle to a string stored in a global
/// string table. This enables O(1) string comparison and reduces memory
/// usage when the same string appears multiple times.
///
/// # Size
///
/// `Symbol` is exactly 4 bytes (u32), making it very cache-friendly compared
/// to `String` which is 24 bytes plus heap allocation.
///
/// # Thread Safety
///
/// Symbols are safe to share across threads (`Sync + Send`). The underlying
/// string table uses DashMap for lock-free concurrent access.
///
/// # Lifetime
///
/// Interned strings have `'static` lifetime and are never deallocated.
/// This is safe because the string table lives for the program duration.
///
/// # Examples
///
/// ```
/// use sharpc_util::symbol::Symbol;
///
/// let keyword = Symbol::intern("fn");
/// let name = Symbol::intern("main");
///
/// assert_eq!(keyword.as_str(), "fn");
/// assert_eq!(name.as_str(), "main");
/// assert_eq!(keyword, Symbol::intern("fn"));  // O(1) comparison
/// ```
///
/// # Performance Notes
///
/// - **Creation**: O(1) hash lookup/insert
/// - **Comparison**: O(1) index comparison
/// - **String retrieval**: O(n) linear search (avoid in hot paths)
/// - **Memory**: One allocation per unique string
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    /// Index into the global string table
    pub(crate) index: u32,
}

// ============================================================================
// KNOWN SYMBOLS (KEYWORDS)
// ============================================================================
//
/// Reserved symbol indices for known symbols (the fixed C#-like keyword set).
///
/// All symbols with index < this value are pre-defined at compile time
/// and correspond to language keywords.
pub(crate) const RESERVED_SYMBOLS_END: u32 = 77;

// ----------------------------------------------------------------------------
// Reserved keywords
// ----------------------------------------------------------------------------

/// Known symbol for the `abstract` keyword
pub const KW_ABSTRACT: Symbol = Symbol { index: 0 };
/// Known symbol for the `as` keyword
pub const KW_AS: Symbol = Symbol { index: 1 };
/// Known symbol for the `base` keyword
pub const KW_BASE: Symbol = Symbol { index: 2 };
/// Known symbol for the `bool` keyword
pub const KW_BOOL: Symbol = Symbol { index: 3 };
/// Known symbol for the `break` keyword
pub const KW_BREAK: Symbol = Symbol { index: 4 };
/// Known symbol for the `byte` keyword
pub const KW_BYTE: Symbol = Symbol { index: 5 };
/// Known symbol for the `case` keyword
pub const KW_CASE: Symbol = Symbol { index: 6 };
/// Known symbol for the `catch` keyword
pub const KW_CATCH: Symbol = Symbol { index: 7 };
/// Known symbol for the `char` keyword
pub const KW_CHAR: Symbol = Symbol { index: 8 };
/// Known symbol for the `checked` keyword
pub const KW_CHECKED: Symbol = Symbol { index: 9 };
/// Known symbol for the `class` keyword
pub const KW_CLASS: Symbol = Symbol { index: 10 };
/// Known symbol for the `const` keyword
pub const KW_CONST: Symbol = Symbol { index: 11 };
/// Known symbol for the `continue` keyword
pub const KW_CONTINUE: Symbol = Symbol { index: 12 };
/// Known symbol for the `decimal` keyword
pub const KW_DECIMAL: Symbol = Symbol { index: 13 };
/// Known symbol for the `default` keyword
pub const KW_DEFAULT: Symbol = Symbol { index: 14 };
/// Known symbol for the `delegate` keyword
pub const KW_DELEGATE: Symbol = Symbol { index: 15 };
/// Known symbol for the `do` keyword
pub const KW_DO: Symbol = Symbol { index: 16 };
/// Known symbol for the `double` keyword
pub const KW_DOUBLE: Symbol = Symbol { index: 17 };
/// Known symbol for the `else` keyword
pub const KW_ELSE: Symbol = Symbol { index: 18 };
/// Known symbol for the `enum` keyword
pub const KW_ENUM: Symbol = Symbol { index: 19 };
/// Known symbol for the `event` keyword
pub const KW_EVENT: Symbol = Symbol { index: 20 };
/// Known symbol for the `explicit` keyword
pub const KW_EXPLICIT: Symbol = Symbol { index: 21 };
/// Known symbol for the `extern` keyword
pub const KW_EXTERN: Symbol = Symbol { index: 22 };
/// Known symbol for the `false` keyword
pub const KW_FALSE: Symbol = Symbol { index: 23 };
/// Known symbol for the `finally` keyword
pub const KW_FINALLY: Symbol = Symbol { index: 24 };
/// Known symbol for the `fixed` keyword
pub const KW_FIXED: Symbol = Symbol { index: 25 };
/// Known symbol for the `float` keyword
pub const KW_FLOAT: Symbol = Symbol { index: 26 };
/// Known symbol for the `for` keyword
pub const KW_FOR: Symbol = Symbol { index: 27 };
/// Known symbol for the `foreach` keyword
pub const KW_FOREACH: Symbol = Symbol { index: 28 };
/// Known symbol for the `goto` keyword
pub const KW_GOTO: Symbol = Symbol { index: 29 };
/// Known symbol for the `if` keyword
pub const KW_IF: Symbol = Symbol { index: 30 };
/// Known symbol for the `implicit` keyword
pub const KW_IMPLICIT: Symbol = Symbol { index: 31 };
/// Known symbol for the `in` keyword
pub const KW_IN: Symbol = Symbol { index: 32 };
/// Known symbol for the `int` keyword
pub const KW_INT: Symbol = Symbol { index: 33 };
/// Known symbol for the `interface` keyword
pub const KW_INTERFACE: Symbol = Symbol { index: 34 };
/// Known symbol for the `internal` keyword
pub const KW_INTERNAL: Symbol = Symbol { index: 35 };
/// Known symbol for the `is` keyword
pub const KW_IS: Symbol = Symbol { index: 36 };
/// Known symbol for the `lock` keyword
pub const KW_LOCK: Symbol = Symbol { index: 37 };
/// Known symbol for the `long` keyword
pub const KW_LONG: Symbol = Symbol { index: 38 };
/// Known symbol for the `namespace` keyword
pub const KW_NAMESPACE: Symbol = Symbol { index: 39 };
/// Known symbol for the `new` keyword
pub const KW_NEW: Symbol = Symbol { index: 40 };
/// Known symbol for the `null` keyword
pub const KW_NULL: Symbol = Symbol { index: 41 };
/// Known symbol for the `object` keyword
pub const KW_OBJECT: Symbol = Symbol { index: 42 };
/// Known symbol for the `operator` keyword
pub const KW_OPERATOR: Symbol = Symbol { index: 43 };
/// Known symbol for the `out` keyword
pub const KW_OUT: Symbol = Symbol { index: 44 };
/// Known symbol for the `override` keyword
pub const KW_OVERRIDE: Symbol = Symbol { index: 45 };
/// Known symbol for the `params` keyword
pub const KW_PARAMS: Symbol = Symbol { index: 46 };
/// Known symbol for the `private` keyword
pub const KW_PRIVATE: Symbol = Symbol { index: 47 };
/// Known symbol for the `protected` keyword
pub const KW_PROTECTED: Symbol = Symbol { index: 48 };
/// Known symbol for the `public` keyword
pub const KW_PUBLIC: Symbol = Symbol { index: 49 };
/// Known symbol for the `readonly` keyword
pub const KW_READONLY: Symbol = Symbol { index: 50 };
/// Known symbol for the `ref` keyword
pub const KW_REF: Symbol = Symbol { index: 51 };
/// Known symbol for the `return` keyword
pub const KW_RETURN: Symbol = Symbol { index: 52 };
/// Known symbol for the `sbyte` keyword
pub const KW_SBYTE: Symbol = Symbol { index: 53 };
/// Known symbol for the `sealed` keyword
pub const KW_SEALED: Symbol = Symbol { index: 54 };
/// Known symbol for the `short` keyword
pub const KW_SHORT: Symbol = Symbol { index: 55 };
/// Known symbol for the `sizeof` keyword
pub const KW_SIZEOF: Symbol = Symbol { index: 56 };
/// Known symbol for the `stackalloc` keyword
pub const KW_STACKALLOC: Symbol = Symbol { index: 57 };
/// Known symbol for the `static` keyword
pub const KW_STATIC: Symbol = Symbol { index: 58 };
/// Known symbol for the `string` keyword
pub const KW_STRING: Symbol = Symbol { index: 59 };
/// Known symbol for the `struct` keyword
pub const KW_STRUCT: Symbol = Symbol { index: 60 };
/// Known symbol for the `switch` keyword
pub const KW_SWITCH: Symbol = Symbol { index: 61 };
/// Known symbol for the `this` keyword
pub const KW_THIS: Symbol = Symbol { index: 62 };
/// Known symbol for the `throw` keyword
pub const KW_THROW: Symbol = Symbol { index: 63 };
/// Known symbol for the `true` keyword
pub const KW_TRUE: Symbol = Symbol { index: 64 };
/// Known symbol for the `try` keyword
pub const KW_TRY: Symbol = Symbol { index: 65 };
/// Known symbol for the `typeof` keyword
pub const KW_TYPEOF: Symbol = Symbol { index: 66 };
/// Known symbol for the `uint` keyword
pub const KW_UINT: Symbol = Symbol { index: 67 };
/// Known symbol for the `ulong` keyword
pub const KW_ULONG: Symbol = Symbol { index: 68 };
/// Known symbol for the `unchecked` keyword
pub const KW_UNCHECKED: Symbol = Symbol { index: 69 };
/// Known symbol for the `unsafe` keyword
pub const KW_UNSAFE: Symbol = Symbol { index: 70 };
/// Known symbol for the `ushort` keyword
pub const KW_USHORT: Symbol = Symbol { index: 71 };
/// Known symbol for the `using` keyword
pub const KW_USING: Symbol = Symbol { index: 72 };
/// Known symbol for the `virtual` keyword
pub const KW_VIRTUAL: Symbol = Symbol { index: 73 };
/// Known symbol for the `void` keyword
pub const KW_VOID: Symbol = Symbol { index: 74 };
/// Known symbol for the `volatile` keyword
pub const KW_VOLATILE: Symbol = Symbol { index: 75 };
/// Known symbol for the `while` keyword
pub const KW_WHILE: Symbol = Symbol { index: 76 };

impl Symbol {
    /// The maximum index value for a symbol
    pub const MAX_INDEX: u32 = u32::MAX;

    /// Intern a string, returning its symbol
    ///
    /// This function will:
    /// 1. Hash the string to check for existing entry
    /// 2. If found, return existing symbol (cache hit)
    /// 3. If not found, allocate new slot and return new symbol (cache miss)
    ///
    /// # Thread Safety
    ///
    /// This function is thread-safe. Multiple threads can intern strings
    /// concurrently using DashMap for lock-free access.
    ///
    /// # Performance
    ///
    /// - **Best case** (string already interned): O(1) hash lookup
    /// - **Worst case** (new unique string): O(1) hash insert + allocation
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::Symbol;
    ///
    /// let keyword = Symbol::intern("fn");
    /// let name = Symbol::intern("main");
    ///
    /// // Interning the same string returns the same symbol
    /// assert_eq!(Symbol::intern("fn"), keyword);
    /// ```
    #[inline]
    pub fn intern(string: &str) -> Self {
        STRING_TABLE.intern(string)
    }

    /// Get the string value associated with this symbol
    ///
    /// # Performance
    ///
    /// O(n) where n is the number of interned strings, as we need to
    /// search the DashMap by index. This is a trade-off for better
    /// concurrent write performance.
    ///
    /// For hot paths, consider caching the string reference or using
    /// [`Symbol::eq_str()`] for comparisons.
    ///
    /// # Panics
    ///
    /// Returns empty string if the symbol is invalid (e.g., created manually
    /// with an out-of-bounds index).
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello");
    /// assert_eq!(sym.as_str(), "hello");
    /// ```
    #[inline]
    pub fn as_str(&self) -> &'static str {
        STRING_TABLE.get(*self).unwrap_or("")
    }

    /// Check if the symbol's string is empty
    ///
    /// # Performance
    ///
    /// O(1) - checks if index corresponds to the empty string symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::Symbol;
    ///
    /// assert!(Symbol::intern("").is_empty());
    /// assert!(!Symbol::intern("hello").is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Get the length of the symbol's string in bytes
    ///
    /// # Performance
    ///
    /// O(n) where n is the number of interned strings (requires lookup).
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::Symbol;
    ///
    /// assert_eq!(Symbol::intern("hello").len(), 5);
    /// assert_eq!(Symbol::intern("").len(), 0);
    /// assert_eq!(Symbol::intern("你好").len(), 6);  // UTF-8 bytes
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Check if the symbol's string starts with a given prefix
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to check for
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello_world");
    /// assert!(sym.starts_with("hello"));
    /// assert!(!sym.starts_with("world"));
    /// ```
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.as_str().starts_with(prefix)
    }

    /// Check if the symbol's string ends with a given suffix
    ///
    /// # Arguments
    ///
    /// * `suffix` - The suffix to check for
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello_world");
    /// assert!(sym.ends_with("world"));
    /// assert!(!sym.ends_with("hello"));
    /// ```
    #[inline]
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.as_str().ends_with(suffix)
    }

    /// Compare the symbol's string with a `&str` without allocation
    ///
    /// This is more efficient than `symbol.as_str() == other` when you
    /// only need equality comparison, as it can short-circuit early.
    ///
    /// # Arguments
    ///
    /// * `other` - The string to compare against
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello");
    /// assert!(sym.eq_str("hello"));
    /// assert!(!sym.eq_str("world"));
    /// ```
    #[inline]
    pub fn eq_str(&self, other: &str) -> bool {
        self.as_str() == other
    }

    /// Returns true if this is a "known" symbol (predefined keywords)
    ///
    /// Known symbols are interned at compiler startup and have indices
    /// in a reserved range (0 to `RESERVED_SYMBOLS_END`).
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::{Symbol, KW_CLASS};
    ///
    /// assert!(KW_CLASS.is_known());
    /// assert!(!Symbol::intern("my_variable").is_known());
    /// ```
    #[inline]
    pub fn is_known(&self) -> bool {
        self.index < RESERVED_SYMBOLS_END
    }

    /// Get the raw index value
    ///
    /// Useful for serialization or debugging.
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("test");
    /// let index = sym.as_u32();
    /// ```
    #[inline]
    pub fn as_u32(&self) -> u32 {
        self.index
    }

    /// Create a symbol from a raw index
    ///
    /// # Safety
    ///
    /// The index must correspond to a valid entry in the string table.
    /// Creating a symbol with an invalid index leads to undefined behavior
    /// when calling `as_str()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("test");
    /// let index = sym.as_u32();
    /// let sym2 = unsafe { Symbol::from_u32_unchecked(index) };
    /// assert_eq!(sym, sym2);
    /// ```
    #[inline]
    pub unsafe fn from_u32_unchecked(index: u32) -> Self {
        Self { index }
    }

    /// Get statistics about the string interner for profiling
    ///
    /// Returns an `InternerStats` struct with detailed information about
    /// the interner's state, including count, capacity, collisions, hits,
    /// and misses.
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::Symbol;
    ///
    /// let stats = Symbol::stats_struct();
    /// println!("Interned {} strings", stats.count);
    /// println!("Hit rate: {:.2}%", stats.hit_rate() * 100.0);
    /// ```
    #[inline]
    pub fn stats_struct() -> InternerStats {
        STRING_TABLE.stats()
    }

    /// Get basic statistics about the string interner (legacy API)
    ///
    /// Returns a tuple of (number of interned strings, hash map capacity).
    /// For more detailed statistics, use [`Symbol::stats_struct`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::Symbol;
    ///
    /// let (count, capacity) = Symbol::stats();
    /// println!("Interned {} strings with capacity {}", count, capacity);
    /// ```
    #[inline]
    pub fn stats() -> (usize, usize) {
        let stats = STRING_TABLE.stats();
        (stats.count, stats.capacity)
    }

    /// Intern a known keyword, returning its predefined symbol
    ///
    /// This is a convenience method for interning common keywords.
    /// For known keywords, this returns the predefined constant symbol
    /// without hashing or allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::{Symbol, KW_CLASS};
    ///
    /// let class_sym = Symbol::intern_known("class");
    /// assert_eq!(class_sym, KW_CLASS);
    ///
    /// // Unknown keywords are interned normally
    /// let unknown = Symbol::intern_known("not_a_keyword");
    /// assert!(!unknown.is_known());
    /// ```
    #[inline]
    pub fn intern_known(string: &str) -> Self {
        match string {
            "abstract" => KW_ABSTRACT,
            "as" => KW_AS,
            "base" => KW_BASE,
            "bool" => KW_BOOL,
            "break" => KW_BREAK,
            "byte" => KW_BYTE,
            "case" => KW_CASE,
            "catch" => KW_CATCH,
            "char" => KW_CHAR,
            "checked" => KW_CHECKED,
            "class" => KW_CLASS,
            "const" => KW_CONST,
            "continue" => KW_CONTINUE,
            "decimal" => KW_DECIMAL,
            "default" => KW_DEFAULT,
            "delegate" => KW_DELEGATE,
            "do" => KW_DO,
            "double" => KW_DOUBLE,
            "else" => KW_ELSE,
            "enum" => KW_ENUM,
            "event" => KW_EVENT,
            "explicit" => KW_EXPLICIT,
            "extern" => KW_EXTERN,
            "false" => KW_FALSE,
            "finally" => KW_FINALLY,
            "fixed" => KW_FIXED,
            "float" => KW_FLOAT,
            "for" => KW_FOR,
            "foreach" => KW_FOREACH,
            "goto" => KW_GOTO,
            "if" => KW_IF,
            "implicit" => KW_IMPLICIT,
            "in" => KW_IN,
            "int" => KW_INT,
            "interface" => KW_INTERFACE,
            "internal" => KW_INTERNAL,
            "is" => KW_IS,
            "lock" => KW_LOCK,
            "long" => KW_LONG,
            "namespace" => KW_NAMESPACE,
            "new" => KW_NEW,
            "null" => KW_NULL,
            "object" => KW_OBJECT,
            "operator" => KW_OPERATOR,
            "out" => KW_OUT,
            "override" => KW_OVERRIDE,
            "params" => KW_PARAMS,
            "private" => KW_PRIVATE,
            "protected" => KW_PROTECTED,
            "public" => KW_PUBLIC,
            "readonly" => KW_READONLY,
            "ref" => KW_REF,
            "return" => KW_RETURN,
            "sbyte" => KW_SBYTE,
            "sealed" => KW_SEALED,
            "short" => KW_SHORT,
            "sizeof" => KW_SIZEOF,
            "stackalloc" => KW_STACKALLOC,
            "static" => KW_STATIC,
            "string" => KW_STRING,
            "struct" => KW_STRUCT,
            "switch" => KW_SWITCH,
            "this" => KW_THIS,
            "throw" => KW_THROW,
            "true" => KW_TRUE,
            "try" => KW_TRY,
            "typeof" => KW_TYPEOF,
            "uint" => KW_UINT,
            "ulong" => KW_ULONG,
            "unchecked" => KW_UNCHECKED,
            "unsafe" => KW_UNSAFE,
            "ushort" => KW_USHORT,
            "using" => KW_USING,
            "virtual" => KW_VIRTUAL,
            "void" => KW_VOID,
            "volatile" => KW_VOLATILE,
            "while" => KW_WHILE,
            _ => Self::intern(string),
        }
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

impl std::fmt::Debug for Symbol {
    /// Format the symbol for debugging, showing the actual string content
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello");
    /// assert_eq!(format!("{:?}", sym), "Symbol(hello)");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.as_str())
    }
}

impl std::fmt::Display for Symbol {
    /// Format the symbol for display, showing just the string content
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello");
    /// assert_eq!(format!("{}", sym), "hello");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pretty-print a symbol with quotes for debugging
///
/// This trait provides optional pretty-printing with quotes to distinguish
/// symbols from regular strings in debug output.
///
/// # Examples
///
/// ```
/// use sharpc_util::symbol::{Symbol, SymbolPretty};
///
/// let sym = Symbol::intern("hello");
/// assert_eq!(format!("{}", sym.pretty()), "\"hello\"");
/// ```
pub trait SymbolPretty {
    /// Get a pretty-printed version with quotes
    fn pretty(&self) -> SymbolPrettyDisplay<'_>;
}

impl SymbolPretty for Symbol {
    fn pretty(&self) -> SymbolPrettyDisplay<'_> {
        SymbolPrettyDisplay(self)
    }
}

/// Display wrapper for pretty-printing symbols with quotes
pub struct SymbolPrettyDisplay<'a>(&'a Symbol);

impl std::fmt::Display for SymbolPrettyDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.0.as_str())
    }
}

impl std::fmt::Debug for SymbolPrettyDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SymbolPretty(\"{}\")", self.0.as_str())
    }
}

// Ensure Symbol is thread-safe
static_assertions::assert_impl_all!(Symbol: Send, Sync);
