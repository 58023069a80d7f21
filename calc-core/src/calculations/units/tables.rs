//! Conversion factor tables.
//!
//! Each factor is the size of one unit expressed in the table's base unit,
//! so `value × factor(from) ÷ factor(to)` converts between any two entries.

use std::f64::consts::PI;

use super::UnitDef;

const fn unit(
    key: &'static str,
    name: &'static str,
    plural: &'static str,
    symbol: &'static str,
    factor: f64,
) -> UnitDef {
    UnitDef {
        key,
        name,
        plural,
        symbol,
        factor,
    }
}

/// Base unit: meter.
pub const LENGTH: &[UnitDef] = &[
    unit("nm", "nanometer", "nanometers", "nm", 1e-9),
    unit("um", "micrometer", "micrometers", "µm", 1e-6),
    unit("mm", "millimeter", "millimeters", "mm", 0.001),
    unit("cm", "centimeter", "centimeters", "cm", 0.01),
    unit("m", "meter", "meters", "m", 1.0),
    unit("km", "kilometer", "kilometers", "km", 1000.0),
    unit("in", "inch", "inches", "in", 0.0254),
    unit("ft", "foot", "feet", "ft", 0.3048),
    unit("yd", "yard", "yards", "yd", 0.9144),
    unit("mi", "mile", "miles", "mi", 1609.344),
    unit("nmi", "nautical mile", "nautical miles", "NM", 1852.0),
];

/// Base unit: kilogram.
pub const MASS: &[UnitDef] = &[
    unit("mg", "milligram", "milligrams", "mg", 1e-6),
    unit("g", "gram", "grams", "g", 0.001),
    unit("kg", "kilogram", "kilograms", "kg", 1.0),
    unit("t", "metric ton", "metric tons", "t", 1000.0),
    unit("ct", "carat", "carats", "ct", 0.0002),
    unit("oz", "ounce", "ounces", "oz", 0.028349523125),
    unit("lb", "pound", "pounds", "lb", 0.45359237),
    unit("st", "stone", "stones", "st", 6.35029318),
    unit("us_ton", "short ton", "short tons", "ton", 907.18474),
    unit("long_ton", "long ton", "long tons", "LT", 1016.0469088),
];

/// Base unit: square meter.
pub const AREA: &[UnitDef] = &[
    unit("mm2", "square millimeter", "square millimeters", "mm²", 1e-6),
    unit("cm2", "square centimeter", "square centimeters", "cm²", 1e-4),
    unit("m2", "square meter", "square meters", "m²", 1.0),
    unit("ha", "hectare", "hectares", "ha", 10_000.0),
    unit("km2", "square kilometer", "square kilometers", "km²", 1e6),
    unit("in2", "square inch", "square inches", "in²", 0.00064516),
    unit("ft2", "square foot", "square feet", "ft²", 0.09290304),
    unit("yd2", "square yard", "square yards", "yd²", 0.83612736),
    unit("ac", "acre", "acres", "ac", 4046.8564224),
    unit("mi2", "square mile", "square miles", "mi²", 2_589_988.110336),
];

/// Base unit: liter.
pub const VOLUME: &[UnitDef] = &[
    unit("ml", "milliliter", "milliliters", "mL", 0.001),
    unit("cm3", "cubic centimeter", "cubic centimeters", "cm³", 0.001),
    unit("l", "liter", "liters", "L", 1.0),
    unit("m3", "cubic meter", "cubic meters", "m³", 1000.0),
    unit("in3", "cubic inch", "cubic inches", "in³", 0.016387064),
    unit("ft3", "cubic foot", "cubic feet", "ft³", 28.316846592),
    unit("floz", "US fluid ounce", "US fluid ounces", "fl oz", 0.0295735295625),
    unit("cup", "US cup", "US cups", "cup", 0.2365882365),
    unit("pt", "US pint", "US pints", "pt", 0.473176473),
    unit("qt", "US quart", "US quarts", "qt", 0.946352946),
    unit("gal", "US gallon", "US gallons", "gal", 3.785411784),
    unit("imp_gal", "imperial gallon", "imperial gallons", "imp gal", 4.54609),
];

/// Kitchen measures. Base unit: milliliter.
pub const COOKING: &[UnitDef] = &[
    unit("pinch", "pinch", "pinches", "pinch", 0.308057599609375),
    unit("dash", "dash", "dashes", "dash", 0.61611519921875),
    unit("tsp", "teaspoon", "teaspoons", "tsp", 4.92892159375),
    unit("tbsp", "tablespoon", "tablespoons", "tbsp", 14.78676478125),
    unit("floz", "fluid ounce", "fluid ounces", "fl oz", 29.5735295625),
    unit("stick", "stick of butter", "sticks of butter", "stick", 118.29411825),
    unit("cup", "cup", "cups", "cup", 236.5882365),
    unit("pt", "pint", "pints", "pt", 473.176473),
    unit("qt", "quart", "quarts", "qt", 946.352946),
    unit("gal", "gallon", "gallons", "gal", 3785.411784),
    unit("ml", "milliliter", "milliliters", "mL", 1.0),
    unit("l", "liter", "liters", "L", 1000.0),
    unit("metric_tsp", "metric teaspoon", "metric teaspoons", "tsp (metric)", 5.0),
    unit("metric_tbsp", "metric tablespoon", "metric tablespoons", "tbsp (metric)", 15.0),
    unit("metric_cup", "metric cup", "metric cups", "cup (metric)", 250.0),
];

/// Base unit: second.
pub const TIME: &[UnitDef] = &[
    unit("ms", "millisecond", "milliseconds", "ms", 0.001),
    unit("s", "second", "seconds", "s", 1.0),
    unit("min", "minute", "minutes", "min", 60.0),
    unit("h", "hour", "hours", "h", 3600.0),
    unit("d", "day", "days", "d", 86_400.0),
    unit("wk", "week", "weeks", "wk", 604_800.0),
    // Gregorian averages: 365.2425 days per year.
    unit("mo", "month", "months", "mo", 2_629_746.0),
    unit("yr", "year", "years", "yr", 31_556_952.0),
];

/// Base unit: meter per second.
pub const SPEED: &[UnitDef] = &[
    unit("mps", "meter per second", "meters per second", "m/s", 1.0),
    unit("kmh", "kilometer per hour", "kilometers per hour", "km/h", 1.0 / 3.6),
    unit("mph", "mile per hour", "miles per hour", "mph", 0.44704),
    unit("fps", "foot per second", "feet per second", "ft/s", 0.3048),
    unit("knot", "knot", "knots", "kn", 1852.0 / 3600.0),
    // Speed of sound at ISA sea level.
    unit("mach", "mach", "mach", "Ma", 340.294),
];

/// Base unit: meter per second squared.
pub const ACCELERATION: &[UnitDef] = &[
    unit("mps2", "meter per second squared", "meters per second squared", "m/s²", 1.0),
    unit("fps2", "foot per second squared", "feet per second squared", "ft/s²", 0.3048),
    unit("g", "standard gravity", "standard gravities", "g", 9.80665),
    unit("gal", "gal", "gals", "Gal", 0.01),
    unit("kmh_s", "kilometer per hour per second", "kilometers per hour per second", "km/h/s", 1.0 / 3.6),
];

/// Base unit: joule.
pub const ENERGY: &[UnitDef] = &[
    unit("ev", "electronvolt", "electronvolts", "eV", 1.602176634e-19),
    unit("j", "joule", "joules", "J", 1.0),
    unit("kj", "kilojoule", "kilojoules", "kJ", 1000.0),
    unit("mj", "megajoule", "megajoules", "MJ", 1e6),
    unit("cal", "calorie", "calories", "cal", 4.184),
    unit("kcal", "kilocalorie", "kilocalories", "kcal", 4184.0),
    unit("wh", "watt-hour", "watt-hours", "Wh", 3600.0),
    unit("kwh", "kilowatt-hour", "kilowatt-hours", "kWh", 3.6e6),
    unit("ftlb", "foot-pound", "foot-pounds", "ft·lbf", 1.3558179483314004),
    unit("btu", "British thermal unit", "British thermal units", "BTU", 1055.05585262),
    unit("therm", "therm", "therms", "thm", 105_505_585.262),
];

/// Base unit: watt.
pub const POWER: &[UnitDef] = &[
    unit("w", "watt", "watts", "W", 1.0),
    unit("kw", "kilowatt", "kilowatts", "kW", 1000.0),
    unit("mw", "megawatt", "megawatts", "MW", 1e6),
    unit("hp", "mechanical horsepower", "mechanical horsepower", "hp", 745.6998715822702),
    unit("ps", "metric horsepower", "metric horsepower", "PS", 735.49875),
    unit("btuh", "BTU per hour", "BTU per hour", "BTU/h", 0.29307107017222),
    unit("ftlbs", "foot-pound per second", "foot-pounds per second", "ft·lbf/s", 1.3558179483314004),
    unit("tr", "ton of refrigeration", "tons of refrigeration", "TR", 3516.8528420667),
];

/// Base unit: pascal.
pub const PRESSURE: &[UnitDef] = &[
    unit("pa", "pascal", "pascals", "Pa", 1.0),
    unit("hpa", "hectopascal", "hectopascals", "hPa", 100.0),
    unit("kpa", "kilopascal", "kilopascals", "kPa", 1000.0),
    unit("mpa", "megapascal", "megapascals", "MPa", 1e6),
    unit("mbar", "millibar", "millibars", "mbar", 100.0),
    unit("bar", "bar", "bars", "bar", 100_000.0),
    unit("atm", "atmosphere", "atmospheres", "atm", 101_325.0),
    unit("psi", "pound per square inch", "pounds per square inch", "psi", 6894.757293168361),
    unit("torr", "torr", "torr", "Torr", 101_325.0 / 760.0),
    unit("mmhg", "millimeter of mercury", "millimeters of mercury", "mmHg", 133.322387415),
    unit("inhg", "inch of mercury", "inches of mercury", "inHg", 3386.389),
];

/// Base unit: newton.
pub const FORCE: &[UnitDef] = &[
    unit("dyn", "dyne", "dynes", "dyn", 1e-5),
    unit("n", "newton", "newtons", "N", 1.0),
    unit("kn", "kilonewton", "kilonewtons", "kN", 1000.0),
    unit("kgf", "kilogram-force", "kilograms-force", "kgf", 9.80665),
    unit("lbf", "pound-force", "pounds-force", "lbf", 4.4482216152605),
];

/// Base unit: byte.
pub const DATA: &[UnitDef] = &[
    unit("bit", "bit", "bits", "bit", 0.125),
    unit("b", "byte", "bytes", "B", 1.0),
    unit("kb", "kilobyte", "kilobytes", "kB", 1e3),
    unit("mb", "megabyte", "megabytes", "MB", 1e6),
    unit("gb", "gigabyte", "gigabytes", "GB", 1e9),
    unit("tb", "terabyte", "terabytes", "TB", 1e12),
    unit("kib", "kibibyte", "kibibytes", "KiB", 1024.0),
    unit("mib", "mebibyte", "mebibytes", "MiB", 1_048_576.0),
    unit("gib", "gibibyte", "gibibytes", "GiB", 1_073_741_824.0),
    unit("tib", "tebibyte", "tebibytes", "TiB", 1_099_511_627_776.0),
];

/// Base unit: radian.
pub const ANGLE: &[UnitDef] = &[
    unit("rad", "radian", "radians", "rad", 1.0),
    unit("deg", "degree", "degrees", "°", PI / 180.0),
    unit("grad", "gradian", "gradians", "gon", PI / 200.0),
    unit("arcmin", "arcminute", "arcminutes", "′", PI / 10_800.0),
    unit("arcsec", "arcsecond", "arcseconds", "″", PI / 648_000.0),
    unit("turn", "turn", "turns", "tr", 2.0 * PI),
];

/// Base unit: hertz.
pub const FREQUENCY: &[UnitDef] = &[
    unit("hz", "hertz", "hertz", "Hz", 1.0),
    unit("khz", "kilohertz", "kilohertz", "kHz", 1e3),
    unit("mhz", "megahertz", "megahertz", "MHz", 1e6),
    unit("ghz", "gigahertz", "gigahertz", "GHz", 1e9),
    unit("rpm", "revolution per minute", "revolutions per minute", "rpm", 1.0 / 60.0),
];
