//! Startup banner written through the raw path by `Logger::init`

pub const BANNER: [&str; 7] = [
    "",
    "  _   _ _     ___   ____   ____   ___   ___ _____ ___ _   _  ____ ",
    " | | | | |   / _ \\ / ___| | __ ) / _ \\ / _ \\_   _|_ _| \\ | |/ ___|",
    " | | | | |  | | | | |  _  |  _ \\| | | | | | || |  | ||  \\| | |  _ ",
    " | |_| | |__| |_| | |_| | | |_) | |_| | |_| || |  | || |\\  | |_| |",
    "  \\___/|_____\\___/ \\____| |____/ \\___/ \\___/ |_| |___|_| \\_|\\____|",
    "",
];
