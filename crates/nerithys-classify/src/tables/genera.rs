//! Genus → region tables. The three sets are disjoint.

pub const ASIAN: &[&str] = &[
  "Betta", "Trichogaster", "Trichopodus", "Trichopsis", "Macropodus",
  "Parasphaerichthys", "Sphaerichthys", "Parosphromenus", "Osphronemus",
  "Helostoma", "Anabas", "Luciocephalus", "Belontia", "Rasbora",
  "Trigonostigma", "Boraras", "Danio", "Devario", "Microdevario",
  "Celestichthys", "Brachydanio", "Microrasbora", "Sundadanio", "Puntius",
  "Dawkinsia", "Desmopuntius", "Haludaria", "Oliotius", "Striuntius",
  "Sahyadria", "Barbodes", "Barbonymus", "Oreichthys", "Balantiocheilos",
  "Cyclocheilichthys", "Hampala", "Leptobarbus", "Epalzeorhynchos",
  "Crossocheilus", "Garra", "Gyrinocheilus", "Tanichthys", "Rhodeus", "Botia",
  "Chromobotia", "Ambastaia", "Syncrossus", "Yasuhikotakia", "Pangio",
  "Acanthopsoides", "Lepidocephalichthys", "Lepidocephalus", "Nemacheilus",
  "Schistura", "Acanthocobitis", "Mesonoemacheilus", "Homaloptera",
  "Homalopteroides", "Sewellia", "Gastromyzon", "Beaufortia",
  "Pseudogastromyzon", "Erromyzon", "Sinogastromyzon", "Balitoropsis",
  "Channa", "Parachanna", "Mystus", "Hemibagrus", "Bagarius", "Pangasius",
  "Pangasianodon", "Kryptopterus", "Ompok", "Silurus", "Wallago", "Akysis",
  "Pseudomystus", "Leiocassis", "Glyptothorax", "Pseudecheneis", "Oryzias",
  "Aplocheilichthys", "Brachygobius", "Mugilogobius", "Stigmatogobius",
  "Rhinogobius", "Nandus", "Badis", "Dario", "Dermogenys", "Nomorhamphus",
  "Hemirhamphodon", "Indostomus", "Monopterus", "Mastacembelus",
  "Macrognathus", "Datnioides", "Toxotes", "Parambassis", "Chanda", "Etroplus",
  "Pseudetroplus", "Carassius", "Cyprinus",
];

/// South and Central American.
pub const AMAZONIAN: &[&str] = &[
  "Paracheirodon", "Hyphessobrycon", "Hemigrammus", "Nematobrycon",
  "Nannostomus", "Pyrrhulina", "Copella", "Carnegiella", "Gasteropelecus",
  "Thoracocharax", "Moenkhausia", "Pristella", "Thayeria", "Petitella",
  "Megalamphodus", "Aphyocharax", "Axelrodia", "Tucanoichthys", "Inpaichthys",
  "Bryconella", "Microschemobrycon", "Tyttocharax", "Erythrocharax",
  "Bryconops", "Astyanax", "Gymnocorymbus", "Phenacogaster", "Knodus",
  "Boehlkea", "Brittanichthys", "Iguanodectes", "Chalceus", "Boulengerella",
  "Apistogramma", "Mikrogeophagus", "Geophagus", "Satanoperca", "Symphysodon",
  "Pterophyllum", "Heros", "Uaru", "Mesonauta", "Laetacara", "Nannacara",
  "Ivanacara", "Dicrossus", "Crenicichla", "Cichla", "Aequidens", "Bujurquina",
  "Cleithracara", "Acarichthys", "Guianacara", "Retroculus", "Biotodoma",
  "Taeniacara", "Teleocichla", "Acaronia", "Hypselecara", "Astronotus",
  "Cichlasoma", "Corydoras", "Brochis", "Aspidoras", "Scleromystax",
  "Hoplosternum", "Megalechis", "Callichthys", "Dianema", "Otocinclus",
  "Hypancistrus", "Ancistrus", "Panaque", "Baryancistrus", "Peckoltia",
  "Leporacanthicus", "Pseudacanthicus", "Spectracanthicus", "Parancistrus",
  "Scobinancistrus", "Hemiancistrus", "Hypostomus", "Pterygoplichthys",
  "Glyptoperichthys", "Loricaria", "Rineloricaria", "Farlowella", "Sturisoma",
  "Sturisomatichthys", "Acanthicus", "Pseudorinelepis", "Hypoptopoma",
  "Nannoptopoma", "Parotocinclus", "Pygocentrus", "Serrasalmus",
  "Pristobrycon", "Catoprion", "Metynnis", "Myleus", "Myloplus", "Colossoma",
  "Piaractus", "Apteronotus", "Eigenmannia", "Sternarchorhynchus", "Gymnotus",
  "Electrophorus", "Pimelodus", "Pimelodella", "Pseudopimelodus",
  "Microglanis", "Brachyplatystoma", "Pseudoplatystoma", "Phractocephalus",
  "Sorubim", "Hemisorubim", "Leiarius", "Tatia", "Centromochlus",
  "Trachelyopterus", "Auchenipterus", "Agamyxis", "Platydoras", "Amblydoras",
  "Acanthodoras", "Anadoras", "Orinocodoras", "Bunocephalus", "Dysichthys",
  "Poecilia", "Xiphophorus", "Gambusia", "Anostomus", "Leporinus", "Abramites",
  "Schizodon", "Osteoglossum", "Arapaima", "Crenuchus", "Characidium",
  "Rivulus", "Austrolebias", "Simpsonichthys", "Nematolebias", "Spectrolebias",
  "Potamotrygon",
];

pub const AFRICAN: &[&str] = &[
  "Pelvicachromis", "Hemichromis", "Steatocranus", "Teleogramma",
  "Lamprologus", "Neolamprologus", "Julidochromis", "Tropheus", "Cyphotilapia",
  "Cyprichromis", "Aulonocara", "Pseudotropheus", "Labidochromis",
  "Melanochromis", "Metriaclima", "Maylandia", "Haplochromis", "Protomelas",
  "Copadichromis", "Dimidiochromis", "Nimbochromis", "Sciaenochromis",
  "Placidochromis", "Otopharynx", "Tyrannochromis", "Petrotilapia",
  "Labeotropheus", "Iodotropheus", "Cynotilapia", "Chindongo", "Astatotilapia",
  "Tilapia", "Oreochromis", "Sarotherodon", "Chromidotilapia", "Paratilapia",
  "Nanochromis", "Benitochromis", "Thysochromis", "Enigmatochromis",
  "Congochromis", "Limbochromis", "Tylochromis", "Synodontis", "Mochokiella",
  "Chiloglanis", "Euchilichthys", "Microsynodontis", "Hemisynodontis",
  "Brycinus", "Phenacogrammus", "Alestopetersius", "Bathyaethiops",
  "Arnoldichthys", "Ladigesia", "Lepidarchus", "Micralestes", "Rhabdalestes",
  "Nannopetersius", "Aphyosemion", "Fundulopanchax", "Epiplatys",
  "Scriptaphyosemion", "Callopanchax", "Archiaphyosemion", "Nothobranchius",
  "Pronothobranchius", "Foerschichthys", "Plataplochilus", "Hypsopanchax",
  "Procatopus", "Lamprichthys", "Poropanchax", "Polypterus", "Erpetoichthys",
  "Protopterus", "Xenomystus", "Papyrocranus", "Pantodon", "Gnathonemus",
  "Campylomormyrus", "Brienomyrus", "Marcusenius", "Mormyrus", "Petrocephalus",
  "Pollimyrus", "Stomatorhinus", "Ctenopoma", "Microctenopoma", "Distichodus",
  "Neolebias", "Nannocharax", "Citharinus", "Hydrocynus", "Alestes",
  "Auchenoglanis", "Parauchenoglanis", "Chrysichthys", "Clarotes", "Clarias",
  "Heterobranchus", "Malapterurus", "Schilbe", "Amphilius", "Phractura",
  "Atopochilus",
];
