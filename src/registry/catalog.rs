//! The built-in MeteoGalicia municipal catalog.
//!
//! One entry per municipality the feed service publishes forecasts for,
//! grouped by province, plus the remap table from the ids the service used
//! before its renumbering to the current province-prefixed ids.

/// (name, id, latitude, longitude)
pub(crate) const STATIONS: &[(&str, i32, f64, f64)] = &[
    // Provincia de A Coruña
    ("Abegondo", 15001, 43.220064, -8.296572),
    ("Ames", 15002, 42.891058, -8.655561),
    ("Aranga", 15003, 43.087931, -8.183142),
    ("Ares", 15004, 43.429518, -8.244127),
    ("Arteixo", 15005, 43.304257, -8.510931),
    ("Arzúa", 15006, 42.930316, -8.161732),
    ("A Baña", 15007, 42.961989, -8.758187),
    ("Bergondo", 15008, 43.309878, -8.233144),
    ("Betanzos", 15009, 43.278924, -8.212244),
    ("Boimorto", 15010, 43.001054, -8.133083),
    ("Boiro", 15011, 42.646287, -8.884336),
    ("Boqueixón", 15012, 42.811593, -8.414553),
    ("Brión", 15013, 42.866686, -8.6786),
    ("Cabana de Bergantiños", 15014, 43.1861, -8.89143),
    ("Cabanas", 15015, 43.419029, -8.162361),
    ("Camariñas", 15016, 43.13209, -9.182695),
    ("Cambre", 15017, 43.292517, -8.341199),
    ("A Capela", 15018, 43.5859, -7.770619),
    ("Carballo", 15019, 43.213285, -8.692194),
    ("Cariño", 15901, 43.741389, -7.869167),
    ("Carnota", 15020, 42.82021, -9.089624),
    ("Carral", 15021, 43.229414, -8.355094),
    ("Cedeira", 15022, 43.65, -8.05),
    ("Cee", 15023, 42.955556, -9.19),
    ("Cerceda", 15024, 43.188611, -8.470278),
    ("Cerdido", 15025, 43.606895, -7.952601),
    ("Cesuras", 15026, 43.166667, -8.2),
    ("Coirós", 15027, 43.252377, -8.16853),
    ("Corcubión", 15028, 42.945833, -9.193333),
    ("Coristanco", 15029, 43.190527, -8.760257),
    ("A Coruña", 15030, 43.370971, -8.395824),
    ("Culleredo", 15031, 43.288369, -8.388858),
    ("Curtis", 15032, 43.124182, -8.145956),
    ("Dodro", 15033, 42.7169, -8.71508),
    ("Dumbría", 15034, 43.01159, -9.118804),
    ("Fene", 15035, 43.466667, -8.166667),
    ("Ferrol", 15036, 43.488436, -8.222513),
    ("Fisterra", 15037, 42.905119, -9.264347),
    ("Frades", 15038, 43.0188, -8.252322),
    ("Irixoa", 15039, 43.284055, -8.061392),
    ("A Laracha", 15041, 43.248611, -8.583333),
    ("Laxe", 15040, 43.219722, -9.005),
    ("Lousame", 15042, 42.758889, -8.829444),
    ("Malpica de Bergantiños", 15043, 43.321853, -8.81344),
    ("Mañón", 15044, 43.736111, -7.705556),
    ("Mazaricos", 15045, 42.936111, -8.991389),
    ("Melide", 15046, 42.916667, -8.016667),
    ("Mesía", 15047, 43.1, -8.266667),
    ("Miño", 15048, 43.345311, -8.203679),
    ("Moeche", 15049, 43.5505, -7.99122),
    ("Monfero", 15050, 43.3249, -8.05468),
    ("Mugardos", 15051, 43.460556, -8.253611),
    ("Muros", 15053, 43.373333, -7.908056),
    ("Muxía", 15052, 43.104722, -9.218056),
    ("Narón", 15054, 43.537244, -8.180392),
    ("Neda", 15055, 43.5013, -8.15627),
    ("Negreira", 15056, 42.9095, -8.73625),
    ("Noia", 15057, 42.785, -8.887778),
    ("Oleiros", 15058, 43.333333, -8.3),
    ("Ordes", 15059, 43.076667, -8.407222),
    ("Oroso", 15060, 42.983333, -8.433333),
    ("Ortigueira", 15061, 43.686337, -7.851941),
    ("Outes", 15062, 42.851111, -8.926389),
    ("Oza dos Ríos", 15063, 43.216667, -8.183056),
    ("Paderne", 15064, 43.283333, -8.174444),
    ("Padrón", 15065, 42.739, -8.66054),
    ("O Pino", 15066, 42.904772, -8.362344),
    ("Pobra do Caramiñal", 15067, 42.6, -8.933333),
    ("Ponteceso", 15068, 43.2427, -8.90096),
    ("Pontedeume", 15069, 43.4026, -8.15269),
    ("As Pontes de García Rodríguez", 15070, 43.433333, -7.833333),
    ("Porto do Son", 15071, 43.15, -9.116667),
    ("Rianxo", 15072, 42.65, -8.816667),
    ("Ribeira", 15073, 42.55, -8.983333),
    ("Rois", 15074, 42.778519, -8.723217),
    ("Sada", 15075, 43.35, -8.25),
    ("San Sadurniño", 15076, 43.5625, -8.05499),
    ("Santa Comba", 15077, 43.033333, -8.816667),
    ("Santiago de Compostela", 15078, 42.877929, -8.557962),
    ("Santiso", 15079, 42.8621, -8.05743),
    ("Sobrado", 15080, 43.04, -8.028889),
    ("As Somozas", 15081, 43.536053, -7.924339),
    ("Teo", 15082, 42.75, -8.5),
    ("Toques", 15083, 42.967778, -7.988056),
    ("Tordoia", 15084, 43.08805, -8.559722),
    ("Touro", 15085, 42.866667, -8.283333),
    ("Trazo", 15086, 43.016667, -8.533333),
    ("Val do Dubra", 15088, 43.0225, -8.638333),
    ("Valdoviño", 15087, 43.6, -8.133056),
    ("Vedra", 15089, 42.783333, -8.466667),
    ("Vilarmaior", 15091, 43.340556, -8.155556),
    ("Vilasantar", 15090, 43.066667, -8.1),
    ("Vimianzo", 15092, 43.11, -9.034444),
    ("Zas", 15093, 43.098868, -8.915439),
    // Provincia de Lugo
    ("Abadín", 27001, 43.363238, -7.475372),
    ("Alfoz", 27002, 43.504114, -7.430217),
    ("Antas de Ulla", 27003, 42.782866, -7.891534),
    ("Baleira", 27004, 43.016195, -7.245937),
    ("Baralla", 27901, 42.894265, -7.250937),
    ("Barreiros", 27005, 43.516891, -7.224222),
    ("Becerreá", 27006, 42.852813, -7.159763),
    ("Begonte", 27007, 43.150487, -7.683717),
    ("Bóveda", 27008, 42.623381, -7.483069),
    ("Burela", 27902, 43.660141, -7.359344),
    ("Carballedo", 27009, 43.055664, -7.345478),
    ("Castro de Rei", 27010, 43.209141, -7.400118),
    ("Castroverde", 27011, 43.030055, -7.325231),
    ("Cervantes", 27012, 42.86958, -7.060733),
    ("Cervo", 27013, 43.6711, -7.409678),
    ("Chantada", 27016, 42.609643, -7.769995),
    ("O Corgo", 27014, 42.943324, -7.432144),
    ("Cospeito", 27015, 43.213997, -7.561169),
    ("Folgoso do Courel", 27017, 42.589015, -7.195165),
    ("A Fonsagrada", 27018, 43.123446, -7.068286),
    ("Foz", 27019, 43.5694, -7.257049),
    ("Friol", 27020, 43.031788, -7.796302),
    ("Guitiriz", 27022, 43.181648, -7.893076),
    ("Guntín", 27023, 42.888495, -7.700343),
    ("O Incio", 27024, 42.656513, -7.362846),
    ("Láncara", 27026, 42.863713, -7.337258),
    ("Lourenzá", 27027, 43.472013, -7.301402),
    ("Lugo", 27028, 43.012132, -7.555844),
    ("Meira", 27029, 43.213496, -7.29445),
    ("Mondoñedo", 27030, 43.42852, -7.363715),
    ("Monforte de Lemos", 27031, 42.518549, -7.510687),
    ("Monterroso", 27032, 42.793322, -7.833767),
    ("Muras", 27033, 43.466391, -7.725449),
    ("Navia de Suarna", 27034, 42.964745, -7.004128),
    ("Negueira de Muñiz", 27035, 43.134549, -6.893653),
    ("As Nogais", 27037, 42.809255, -7.109292),
    ("Ourol", 27038, 43.564503, -7.642794),
    ("Outeiro de Rei", 27039, 43.103819, -7.613633),
    ("Palas de Rei", 27040, 42.884769, -7.849045),
    ("Pantón", 27041, 42.513994, -7.619405),
    ("Paradela", 27042, 42.764469, -7.567799),
    ("O Páramo", 27043, 42.840896, -7.497504),
    ("A Pastoriza", 27044, 43.305943, -7.36496),
    ("Pedrafita do Cebreiro", 27045, 42.357004, -7.49027),
    ("A Pobra do Brollón", 27047, 42.556787, -7.392136),
    ("Pol", 27046, 43.149438, -7.32949),
    ("A Pontenova", 27048, 43.348213, -7.192612),
    ("Portomarín", 27049, 42.807476, -7.616229),
    ("Quiroga", 27050, 42.475705, -7.269387),
    ("Rábade", 27056, 43.121974, -7.623568),
    ("Ribadeo", 27051, 43.537396, -7.04303),
    ("Ribas de Sil", 27052, 42.466565, -7.287959),
    ("Ribeira de Piquín", 27053, 43.196166, -7.197762),
    ("Riotorto", 27054, 43.344718, -7.261877),
    ("Samos", 27055, 42.73052, -7.326669),
    ("Sarria", 27057, 42.780063, -7.413583),
    ("O Saviñao", 27058, 42.644566, -7.654381),
    ("Sober", 27059, 42.461571, -7.586875),
    ("Taboada", 27060, 42.715426, -7.762313),
    ("Trabada", 27061, 43.446812, -7.194135),
    ("Triacastela", 27062, 42.756561, -7.239518),
    ("O Valadouro", 27063, 43.55029, -7.441349),
    ("O Vicedo", 27064, 43.732344, -7.673435),
    ("Vilalba", 27065, 43.297323, -7.680774),
    ("Viveiro", 27066, 43.66148, -7.594527),
    ("Xermade", 27021, 43.355562, -7.814337),
    ("Xove", 27025, 43.684788, -7.512481),
    // Provincia de Ourense
    ("Allariz", 32001, 42.190214, -7.801759),
    ("Amoeiro", 32002, 42.414792, -7.94535),
    ("A Arnoia", 32003, 42.256936, -8.139714),
    ("Avión", 32004, 42.374969, -8.250552),
    ("Baltar", 32005, 41.951368, -7.716246),
    ("Bande", 32006, 42.032369, -7.974082),
    ("Baños de Molgas", 32007, 42.241656, -7.672344),
    ("Barbadás", 32008, 42.298596, -7.887273),
    ("O Barco de Valdeorras", 32009, 42.415461, -6.981956),
    ("Beade", 32010, 42.329648, -8.127204),
    ("Beariz", 32011, 42.467538, -8.273331),
    ("Os Blancos", 32012, 41.998523, -7.752145),
    ("Boborás", 32013, 42.432793, -8.142684),
    ("A Bola", 32014, 42.156588, -7.912207),
    ("O Bolo", 32015, 42.307403, -7.100581),
    ("Calvos de Randín", 32016, 41.945958, -7.896318),
    ("Carballeda de Avia", 32018, 42.320034, -8.165395),
    ("Carballeda de Valdeorras", 32017, 42.350679, -6.848997),
    ("O Carballiño", 32019, 42.458927, -8.087997),
    ("Cartelle", 32020, 42.250138, -8.070405),
    ("Castrelo de Miño", 32022, 42.290707, -8.122379),
    ("Castrelo do Val", 32021, 41.991219, -7.424336),
    ("Castro Caldelas", 32023, 42.37443, -7.415024),
    ("Celanova", 32024, 42.152492, -7.957584),
    ("Cenlle", 32025, 42.342845, -8.088044),
    ("Chandrexa de Queixa", 32029, 42.254498, -7.381557),
    ("Coles", 32026, 42.40157, -7.83688),
    ("Cortegada", 32027, 42.206555, -8.170745),
    ("Cualedro", 32028, 41.98854, -7.593873),
    ("Entrimo", 32030, 41.932837, -8.116386),
    ("Esgos", 32031, 42.32519, -7.696223),
    ("Gomesende", 32033, 42.163133, -8.10349),
    ("A Gudiña", 32034, 42.061178, -7.138027),
    ("O Irixo", 32035, 42.512143, -8.118213),
    ("Larouco", 32038, 42.347031, -7.162295),
    ("Laza", 32039, 42.060844, -7.461394),
    ("Leiro", 32040, 42.370498, -8.125144),
    ("Lobeira", 32041, 41.986546, -8.039442),
    ("Lobios", 32042, 41.901175, -8.083409),
    ("Maceda", 32043, 42.270736, -7.651984),
    ("Manzaneda", 32044, 42.310093, -7.234713),
    ("Maside", 32045, 42.412701, -8.026524),
    ("Melón", 32046, 42.258731, -8.213893),
    ("A Merca", 32047, 42.223782, -7.904023),
    ("A Mezquita", 32048, 42.238272, -7.869093),
    ("Montederramo", 32049, 42.275904, -7.502634),
    ("Monterrei", 32050, 41.947043, -7.449354),
    ("Muíños", 32051, 41.954272, -7.98482),
    ("Nogueira de Ramuín", 32052, 42.413097, -7.725627),
    ("Oímbra", 32053, 41.886832, -7.46899),
    ("Ourense", 32054, 42.340057, -7.864653),
    ("Paderne de Allariz", 32055, 42.273117, -7.752878),
    ("Padrenda", 32056, 42.133333, -8.15),
    ("Parada de Sil", 32057, 42.383056, -7.568889),
    ("O Pereiro de Aguiar", 32058, 42.333333, -7.8),
    ("A Peroxa", 32059, 42.438889, -7.793333),
    ("Petín", 32060, 42.382222, -7.125833),
    ("Piñor", 32061, 42.497778, -8.005),
    ("A Pobra de Trives", 32063, 42.339444, -7.253056),
    ("Pontedeva", 32064, 42.168611, -8.139167),
    ("Porqueira", 32062, 42.017778, -7.844444),
    ("Punxín", 32065, 42.370278, -8.011944),
    ("Quintela de Leirado", 32066, 42.138333, -8.101667),
    ("Rairiz de Veiga", 32067, 42.083056, -7.832222),
    ("Ramirás", 32068, 42.283611, -8.018611),
    ("Ribadavia", 32069, 42.287778, -8.1425),
    ("Riós", 32071, 41.974167, -7.2825),
    ("A Rúa", 32072, 42.4, -7.1),
    ("Rubiá", 32073, 42.449722, -6.948889),
    ("San Amaro", 32074, 42.373056, -8.073056),
    ("San Cibrao das Viñas", 32075, 42.294739, -7.872841),
    ("San Cristovo de Cea", 32076, 42.4725, -7.981944),
    ("San Xoán de Río", 32070, 42.384444, -7.314167),
    ("Sandiás", 32077, 42.111111, -7.756667),
    ("Sarreaus", 32078, 42.086667, -7.603333),
    ("Taboadela", 32079, 42.240833, -7.825),
    ("A Teixeira", 32080, 42.391722, -7.472302),
    ("Toén", 32081, 42.314722, -7.953889),
    ("Trasmiras", 32082, 42.022778, -7.616667),
    ("A Veiga", 32083, 42.249722, -7.025833),
    ("Verea", 32084, 42.093889, -7.993611),
    ("Verín", 32085, 41.940489, -7.439134),
    ("Viana do Bolo", 32086, 42.183282, -7.109405),
    ("Vilamarín", 32087, 42.464167, -7.89),
    ("Vilamartín de Valdeorras", 32088, 42.415556, -7.059167),
    ("Vilar de Barrio", 32089, 42.159722, -7.611667),
    ("Vilar de Santos", 32090, 42.085556, -7.796667),
    ("Vilardevós", 32091, 41.906944, -7.313056),
    ("Vilariño de Conso", 32092, 42.176944, -7.171111),
    ("Xinzo de Limia", 32032, 42.063611, -7.723889),
    ("Xunqueira de Ambía", 32036, 42.205556, -7.735556),
    ("Xunqueira de Espadanedo", 32037, 42.3175, -7.628611),
    // Provincia de Pontevedra
    ("Agolada", 36020, 42.762043, -8.019851),
    ("Arbo", 36001, 42.11142, -8.311633),
    ("Baiona", 36003, 42.119426, -8.853013),
    ("Barro", 36002, 42.554424, -8.622188),
    ("Bueu", 36004, 42.325238, -8.785207),
    ("Caldas de Reis", 36005, 42.604558, -8.641268),
    ("Cambados", 36006, 42.513646, -8.813144),
    ("Campo Lameiro", 36007, 42.540402, -8.543847),
    ("Cangas", 36008, 42.264543, -8.782117),
    ("A Cañiza", 36009, 42.212499, -8.272966),
    ("Catoira", 36010, 42.66707, -8.722464),
    ("Cerdedo", 36011, 42.532908, -8.390649),
    ("Cotobade", 36012, 42.222463, -8.491253),
    ("Covelo", 36013, 42.231981, -8.363775),
    ("Crecente", 36014, 42.152014, -8.224046),
    ("Cuntis", 36015, 42.632656, -8.56343),
    ("Dozón", 36016, 42.584473, -8.022618),
    ("A Estrada", 36017, 42.689596, -8.490593),
    ("Forcarei", 36018, 42.589536, -8.351329),
    ("Fornelos de Montes", 36019, 42.339625, -8.452459),
    ("Gondomar", 36021, 42.111515, -8.760913),
    ("O Grove", 36022, 42.49539, -8.865673),
    ("A Guarda", 36023, 41.906813, -8.864521),
    ("A Illa de Arousa", 36901, 42.556621, -8.867525),
    ("Lalín", 36024, 42.661421, -8.11096),
    ("A Lama", 36025, 42.39703, -8.442566),
    ("Marín", 36026, 42.391452, -8.701607),
    ("Meaño", 36027, 42.439769, -8.775465),
    ("Meis", 36028, 42.515037, -8.691994),
    ("Moaña", 36029, 42.282262, -8.736719),
    ("Mondariz", 36030, 42.233045, -8.454326),
    ("Mondariz-Balneario", 36031, 42.226055, -8.469239),
    ("Moraña", 36032, 42.571161, -8.583438),
    ("Mos", 36033, 42.591669, -8.584916),
    ("As Neves", 36034, 42.087809, -8.414865),
    ("Nigrán", 36035, 42.149405, -8.809417),
    ("Oia", 36036, 42.184427, -8.803059),
    ("Pazos de Borbén", 36037, 42.292453, -8.530504),
    ("Poio", 36041, 42.434322, -8.65822),
    ("Ponte Caldelas", 36043, 42.389907, -8.502529),
    ("Ponteareas", 36042, 42.175061, -8.504558),
    ("Pontecesures", 36044, 42.717885, -8.651954),
    ("Pontevedra", 36038, 42.43366, -8.648051),
    ("O Porriño", 36039, 42.16035, -8.618015),
    ("Portas", 36040, 42.579598, -8.66882),
    ("Redondela", 36045, 42.28223, -8.609726),
    ("Ribadumia", 36046, 42.518912, -8.751408),
    ("Rodeiro", 36047, 42.648654, -7.946037),
    ("O Rosal", 36048, 41.937371, -8.83668),
    ("Salceda de Caselas", 36049, 42.100388, -8.560802),
    ("Salvaterra de Miño", 36050, 42.110958, -8.474974),
    ("Sanxenxo", 36051, 42.403242, -8.811943),
    ("Silleda", 36052, 42.701582, -8.24516),
    ("Soutomaior", 36053, 42.338864, -8.569016),
    ("Tomiño", 36054, 42.002111, -8.737616),
    ("Tui", 36055, 42.049038, -8.646805),
    ("Valga", 36056, 42.700368, -8.648999),
    ("Vigo", 36057, 42.231397, -8.712445),
    ("Vila de Cruces", 36059, 42.793574, -8.167287),
    ("Vilaboa", 36058, 42.348887, -8.643754),
    ("Vilagarcía de Arousa", 36060, 42.593922, -8.765969),
    ("Vilanova de Arousa", 36061, 42.562753, -8.827561),
];

/// (legacy id, current id)
pub(crate) const LEGACY_IDS: &[(i32, i32)] = &[
    (14, 15030), // A Coruña
    (39, 36015), // Cuntis
    (1, 15036), // Ferrol
    (2, 15037), // Fisterra
    (10, 36024), // Lalín
    (5, 27028), // Lugo
    (4, 27031), // Monforte
    (38, 32009), // O Barco
    (40, 15061), // Ortigueira
    (8, 32054), // Ourense
    (30, 27045), // Pedrafita
    (11, 36038), // Pontevedra
    (6, 27051), // Ribadeo
    (3, 15078), // Santiago
    (9, 32085), // Verín
    (12, 36057), // Vigo
    (13, 36060), // Vilagarcía
    (7, 27066), // Viveiro
];
