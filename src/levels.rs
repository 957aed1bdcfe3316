//! Built-in level plans
//!
//! Plans use the standard symbol table (see [`crate::parser`]). Unknown
//! symbols such as `w` and `*` are decoration and parse as open air.

use crate::error::SimError;
use crate::parser::LevelParser;
use crate::sim::Level;

pub const SCHEMAS: &[&[&str]] = &[
    &[
        "     v                 ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "  |xxx       w         ",
        "  o                 o  ",
        "  x               = x  ",
        "  x          o o    x  ",
        "  x  @    *  xxxxx  x  ",
        "  xxxxx             x  ",
        "      x!!!!!!!!!!!!!x  ",
        "      xxxxxxxxxxxxxxx  ",
        "                       ",
    ],
    &[
        "     v                 ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "  |                    ",
        "  o                 o  ",
        "  x               = x  ",
        "  x          o o    x  ",
        "  x  @       xxxxx  x  ",
        "  xxxxx             x  ",
        "      x!!!!!!!!!!!!!x  ",
        "      xxxxxxxxxxxxxxx  ",
        "                       ",
    ],
    &[
        "        |           |  ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "     |                 ",
        "                       ",
        "         =      |      ",
        " @ |  o            o   ",
        "xxxxxxxxx!!!!!!!xxxxxxx",
        "                       ",
    ],
    &[
        "                       ",
        "                       ",
        "                       ",
        "    o                  ",
        "    x      | x!!x=     ",
        "         x             ",
        "                      x",
        "                       ",
        "                       ",
        "                       ",
        "               xxx     ",
        "                       ",
        "                       ",
        "       xxx  |          ",
        "                       ",
        " @                     ",
        "xxx                    ",
        "                       ",
    ],
    &[
        "   v         v",
        "              ",
        "         !o!  ",
        "              ",
        "              ",
        "              ",
        "              ",
        "         xxx  ",
        "          o   ",
        "        =     ",
        "  @           ",
        "  xxxx        ",
        "  |           ",
        "      xxx    x",
        "              ",
        "          !   ",
        "              ",
        "              ",
        " o       x    ",
        " x      x     ",
        "       x      ",
        "      x       ",
        "   xx         ",
        "              ",
    ],
];

/// Parse built-in level `index` (zero-based)
pub fn load(parser: &mut LevelParser, index: usize) -> Result<Level, SimError> {
    let plan = SCHEMAS.get(index).ok_or(SimError::UnknownLevel {
        number: index + 1,
        count: SCHEMAS.len(),
    })?;
    log::info!("Loading level {}", index + 1);
    parser.parse(plan)
}

/// Map a one-based level number as typed by a user to a plan index
pub fn index_from_arg(arg: &str) -> Result<usize, SimError> {
    let number: usize = arg
        .trim()
        .parse()
        .map_err(|_| SimError::InvalidArgument(format!("level number {arg:?}")))?;
    number
        .checked_sub(1)
        .filter(|index| *index < SCHEMAS.len())
        .ok_or(SimError::UnknownLevel {
            number,
            count: SCHEMAS.len(),
        })
}
