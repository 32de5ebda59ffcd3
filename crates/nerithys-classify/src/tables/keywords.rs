//! Place names and regional terms, lowercase. Each is matched at the start
//! of a word, so stems such as `indonés` cover their inflections.

pub const ASIAN: &[&str] = &[
  "asie", "asia", "inde", "india", "thaïlande", "thailand", "birmanie",
  "myanmar", "vietnam", "cambodge", "laos", "malaisie", "malaysia", "bornéo",
  "borneo", "sumatra", "java", "indonés", "indonesi", "sri lanka", "ceylan",
  "chine", "china", "japon", "japan", "corée", "korea", "taïwan", "taiwan",
  "mékong", "mekong", "gange", "ganges", "brahmapoutre", "brahmaputra",
  "irrawaddy", "philippin", "bangladesh", "népal", "nepal", "pakistan",
  "sud-est asiatique", "asie du sud", "extrême-orient", "bengale",
];

pub const AMAZONIAN: &[&str] = &[
  "amazone", "amazon", "amérique du sud", "south america", "sudaméri",
  "brésil", "brazil", "brasil", "colombie", "colombia", "pérou", "peru",
  "venezuela", "guyane", "guyana", "guiana", "surinam", "bolivie", "bolivia",
  "équateur", "ecuador", "paraguay", "uruguay", "argentine", "argentin",
  "orinoque", "orinoco", "río negro", "rio negro", "rio branco",
  "amérique centrale", "central america", "panama", "costa rica", "mexique",
  "mexico", "guatemala", "honduras", "nicaragua", "belize", "néotropical",
  "neotropical", "sud-américain", "rio", "araguaia", "tocantins", "xingu",
  "tapajós", "madeira", "paraná", "parana", "solimões", "ucayali",
];

pub const AFRICAN: &[&str] = &[
  "afrique", "africa", "congo", "cameroun", "cameroon", "niger", "nigeria",
  "lac malawi", "lac tanganyika", "lac victoria", "rift", "malawi",
  "tanganyika", "victoria", "senegal", "guinea", "sierra leone", "liberia",
  "ghana", "ivory coast", "gabon", "angola", "mozambique", "tanzanie",
  "tanzania", "kenya", "ouganda", "uganda", "rwanda", "burundi", "zambie",
  "zambia", "zimbabwe", "ethiopia", "soudan", "sudan", "tchad", "chad", "nil",
  "nile", "volta", "zambezi", "limpopo", "okavango",
];
