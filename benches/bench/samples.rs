/// Representative inputs with expected results.
pub const PATTERNS: &[(&str, &str, bool)] = &[
    ("question", "?(abc)", true),
    ("at", "@(abc)", true),
    ("bang", "!(abc)", true),
    ("star", "*(abc)", true),
    ("plus", "+(abc)", true),
    ("nested-path", "xyz/?(abc)/xyz", true),
    ("alternation", "xyz/@(abc|def)/xyz", true),
    ("simple", "simple.js", false),
    ("wildcard", "*.js", false),
    ("globstar", "**/*.js", false),
    ("path", "abc/def/ghi.js", false),
    ("class", "[a-z].js", false),
    ("file", "path/to/file.txt", false),
    ("plain", "no-extglob-here", false),
    ("empty", "", false),
    ("char", "a", false),
    ("escaped", "\\?(abc)", false),
    ("long", "very/long/path/with/many/segments/but/no/extglob/pattern.js", false),
];
