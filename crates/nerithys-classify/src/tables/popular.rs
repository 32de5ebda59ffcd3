//! Popularity allow-lists.

/// Binomials kept even though their genus is not listed.
pub const SPECIES: &[&str] = &[
  "Abramis brama", "Acantopsis dialuzona", "Ageneiosus marmoratus",
  "Anostomus anostomus", "Bedotia geayi", "Chaca chaca", "Chitala ornata",
  "Colisa lalia", "Colomesus asellus", "Dimidiochromis compressiceps",
  "Dimidiochromis strigatus", "Electrophorus electricus", "Etroplus maculatus",
  "Etroplus suratensis", "Hoplias malabaricus", "Indostomus paradoxus",
  "Lepisosteus oculatus", "Monodactylus argenteus", "Monodactylus sebae",
  "Monocirrhus polyacanthus", "Periophthalmus barbarus",
  "Protopterus annectens", "Scatophagus argus", "Tetraodon nigroviridis",
  "Wallago attu", "Hemichromis bimaculatus", "Astatotilapia burtoni",
  "Haplochromis obliquidens", "Pseudetroplus maculatus",
];

pub const FRESHWATER_GENERA: &[&str] = &[
  "Poecilia", "Xiphophorus", "Gambusia", "Limia", "Alfaro", "Ameca",
  "Xenotoca", "Zoogoneticus", "Ilyodon", "Goodea", "Dermogenys",
  "Nomorhamphus", "Hemirhamphodon", "Paracheirodon", "Hyphessobrycon",
  "Hemigrammus", "Nematobrycon", "Moenkhausia", "Pristella", "Thayeria",
  "Petitella", "Inpaichthys", "Aphyocharax", "Axelrodia", "Gymnocorymbus",
  "Boehlkea", "Megalamphodus", "Tucanoichthys", "Bryconella", "Nannostomus",
  "Anostomus", "Leporinus", "Abramites", "Carnegiella", "Gasteropelecus",
  "Thoracocharax", "Copella", "Pyrrhulina", "Pygocentrus", "Serrasalmus",
  "Metynnis", "Myleus", "Myloplus", "Colossoma", "Piaractus", "Puntius",
  "Dawkinsia", "Desmopuntius", "Haludaria", "Oliotius", "Sahyadria",
  "Barbodes", "Barbonymus", "Striuntius", "Balantiocheilos", "Oreichthys",
  "Rasbora", "Trigonostigma", "Boraras", "Danio", "Devario", "Microdevario",
  "Celestichthys", "Sundadanio", "Microrasbora", "Brevibora", "Trigonopoma",
  "Tanichthys", "Pimephales", "Rhodeus", "Carassius", "Cyprinus", "Botia",
  "Chromobotia", "Ambastaia", "Syncrossus", "Yasuhikotakia", "Pangio",
  "Acanthopsoides", "Lepidocephalichthys", "Nemacheilus", "Schistura",
  "Acanthocobitis", "Sewellia", "Gastromyzon", "Beaufortia",
  "Pseudogastromyzon", "Erromyzon", "Homaloptera", "Balitoropsis", "Corydoras",
  "Brochis", "Aspidoras", "Scleromystax", "Hoplosternum", "Megalechis",
  "Dianema", "Ancistrus", "Hypancistrus", "Panaque", "Baryancistrus",
  "Peckoltia", "Leporacanthicus", "Pseudacanthicus", "Spectracanthicus",
  "Parancistrus", "Scobinancistrus", "Hemiancistrus", "Hypostomus",
  "Pterygoplichthys", "Glyptoperichthys", "Loricaria", "Rineloricaria",
  "Farlowella", "Sturisoma", "Sturisomatichthys", "Acanthicus",
  "Pseudorinelepis", "Otocinclus", "Hypoptopoma", "Parotocinclus",
  "Nannoptopoma", "Chaetostoma", "Apistogramma", "Mikrogeophagus", "Geophagus",
  "Satanoperca", "Symphysodon", "Pterophyllum", "Heros", "Uaru", "Mesonauta",
  "Laetacara", "Nannacara", "Ivanacara", "Dicrossus", "Crenicichla", "Cichla",
  "Aequidens", "Bujurquina", "Cleithracara", "Acarichthys", "Guianacara",
  "Biotodoma", "Taeniacara", "Astronotus", "Cichlasoma", "Hypselecara",
  "Acaronia", "Amatitlania", "Cryptoheros", "Vieja", "Thorichthys",
  "Herichthys", "Amphilophus", "Parachromis", "Nandopsis", "Rocio", "Theraps",
  "Mayaheros", "Aulonocara", "Pseudotropheus", "Labidochromis",
  "Melanochromis", "Metriaclima", "Maylandia", "Cynotilapia", "Chindongo",
  "Petrotilapia", "Labeotropheus", "Iodotropheus", "Protomelas",
  "Copadichromis", "Dimidiochromis", "Nimbochromis", "Sciaenochromis",
  "Placidochromis", "Otopharynx", "Tyrannochromis", "Neolamprologus",
  "Julidochromis", "Tropheus", "Cyphotilapia", "Cyprichromis", "Lamprologus",
  "Altolamprologus", "Telmatochromis", "Eretmodus", "Spathodus",
  "Tanganicodus", "Callochromis", "Xenotilapia", "Enantiopus",
  "Pelvicachromis", "Hemichromis", "Steatocranus", "Nanochromis",
  "Chromidotilapia", "Benitochromis", "Enigmatochromis", "Congochromis",
  "Tilapia", "Oreochromis", "Phenacogrammus", "Alestopetersius",
  "Arnoldichthys", "Brycinus", "Ladigesia", "Bathyaethiops", "Aphyosemion",
  "Fundulopanchax", "Epiplatys", "Scriptaphyosemion", "Callopanchax",
  "Nothobranchius", "Austrolebias", "Aplocheilus", "Oryzias", "Lamprichthys",
  "Rivulus", "Betta", "Trichogaster", "Trichopodus", "Trichopsis",
  "Macropodus", "Sphaerichthys", "Parosphromenus", "Osphronemus", "Helostoma",
  "Anabas", "Ctenopoma", "Microctenopoma", "Belontia", "Parasphaerichthys",
  "Channa", "Mystus", "Hemibagrus", "Pangasius", "Pangasianodon",
  "Kryptopterus", "Ompok", "Synodontis", "Clarias", "Malapterurus",
  "Pimelodus", "Pimelodella", "Pseudopimelodus", "Microglanis", "Tatia",
  "Centromochlus", "Trachelyopterus", "Agamyxis", "Platydoras", "Amblydoras",
  "Acanthodoras", "Bunocephalus", "Gnathonemus", "Campylomormyrus",
  "Marcusenius", "Mormyrus", "Petrocephalus", "Pollimyrus", "Osteoglossum",
  "Arapaima", "Polypterus", "Erpetoichthys", "Pantodon", "Xenomystus",
  "Papyrocranus", "Apteronotus", "Eigenmannia", "Gymnotus", "Badis", "Dario",
  "Nandus", "Brachygobius", "Mugilogobius", "Stigmatogobius", "Rhinogobius",
  "Mastacembelus", "Macrognathus", "Melanotaenia", "Glossolepis",
  "Iriatherina", "Pseudomugil", "Chilatherina", "Bedotia", "Telmatherina",
  "Toxotes", "Parambassis", "Datnioides", "Monocirrhus", "Tetraodon",
  "Carinotetraodon", "Dichotomyctere", "Acipenser", "Potamotrygon",
  "Distichodus", "Neolebias", "Lepidarchus", "Hydrocynus", "Boulengerella",
  "Acestrorhynchus", "Chalceus", "Crenuchus", "Characidium", "Hoplias",
  "Ambloplites", "Lepomis", "Micropterus", "Haplochromis", "Astatotilapia",
  "Garra", "Crossocheilus", "Epalzeorhynchos", "Pethia", "Barbus", "Puntigrus",
  "Gymnogeophagus", "Stiphodon", "Petrochromis", "Lepidiolamprologus",
  "Elassoma", "Micropoecilia", "Girardinus", "Simpsonichthys", "Pachypanchax",
  "Enteromius", "Cyclocheilichthys", "Kottelatlimia", "Laubuka",
  "Homalopteroides", "Sinogastromyzon",
];

pub const MARINE_GENERA: &[&str] = &[
  "Amphiprion", "Premnas", "Acanthurus", "Paracanthurus", "Zebrasoma", "Naso",
  "Ctenochaetus", "Centropyge", "Pomacanthus", "Holacanthus", "Pygoplites",
  "Genicanthus", "Apolemichthys", "Chaetodontoplus", "Chaetodon", "Chelmon",
  "Forcipiger", "Heniochus", "Halichoeres", "Cirrhilabrus", "Paracheilinus",
  "Pseudocheilinus", "Thalassoma", "Labroides", "Coris", "Anampses",
  "Macropharyngodon", "Bodianus", "Chrysiptera", "Pomacentrus", "Dascyllus",
  "Chromis", "Abudefduf", "Stegastes", "Neoglyphidodon", "Gobiodon",
  "Valenciennea", "Amblyeleotris", "Stonogobiops", "Elacatinus",
  "Nemateleotris", "Ptereleotris", "Trimma", "Amblygobius", "Signigobius",
  "Ecsenius", "Salarias", "Meiacanthus", "Atrosalarias", "Escenius",
  "Blenniella", "Pseudochromis", "Pictichromis", "Manonichthys",
  "Oxycirrhites", "Cirrhitichthys", "Neocirrhites", "Paracirrhites",
  "Pterapogon", "Ostorhinchus", "Sphaeramia", "Zoramia", "Synchiropus",
  "Neosynchiropus", "Pterois", "Dendrochirus", "Cephalopholis", "Epinephelus",
  "Hippocampus", "Doryrhamphus", "Dunckerocampus", "Rhinecanthus", "Odonus",
  "Xanthichthys", "Balistoides", "Balistapus", "Melichthys", "Sufflamen",
  "Ostracion", "Lactoria", "Canthigaster", "Arothron", "Diodon", "Acreichthys",
  "Oxymonacanthus", "Aluterus", "Cantherhines", "Siganus", "Lo", "Gymnothorax",
  "Echidna", "Rhinomuraena", "Opistognathus", "Gramma", "Lipogramma",
  "Assessor", "Pseudanthias", "Serranocirrhitus", "Antennarius", "Platax",
  "Zanclus", "Parupeneus", "Hoplolatilus", "Aeoliscus", "Cryptocentrus",
  "Tomiyamichthys", "Ctenogobiops",
];

/// Only consulted for records tagged brackish.
pub const BRACKISH_GENERA: &[&str] = &[
  "Brachygobius", "Stigmatogobius", "Monodactylus", "Scatophagus",
  "Periophthalmus", "Toxotes", "Datnioides", "Tetraodon", "Dichotomyctere",
  "Dermogenys", "Etroplus", "Pseudetroplus", "Selenotoca", "Parambassis",
  "Chanda", "Poecilia", "Gambusia",
];
