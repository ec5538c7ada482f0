//! Ordered classification rules for aircraft type normalization.
//!
//! Each rule is (regex pattern, canonical model name, manufacturer override).
//! Rules are evaluated strictly in order and the FIRST match wins, so order
//! encodes precedence: variant rules (neo, MAX, E2) must precede the family
//! rules that would otherwise shadow them, and full-text model names must
//! precede bare numeric codes. A new rule inserted after a broader rule that
//! already consumes its inputs is silently dead - the ordering tests in
//! `normalizer::tests` pin the known-tricky spots.
//!
//! Patterns are matched case-insensitively, substring match accepted.

/// One classification rule.
pub struct TypeRule {
    /// Regex source, compiled case-insensitive on first use
    pub pattern: &'static str,
    /// Canonical model display name
    pub canonical: &'static str,
    /// Manufacturer implied by the model, overriding the raw manufacturer
    pub manufacturer: Option<&'static str>,
}

const fn rule(
    pattern: &'static str,
    canonical: &'static str,
    manufacturer: &'static str,
) -> TypeRule {
    TypeRule {
        pattern,
        canonical,
        manufacturer: Some(manufacturer),
    }
}

/// The ordered rule table. Order is significant.
pub const AIRCRAFT_RULES: &[TypeRule] = &[
    // ============ AIRBUS NARROWBODY ============
    rule(r"A\s*318.*", "A318", "Airbus"),
    // A319/A320/A321: neo variants (including -N engine option codes like
    // -251N/-271N) must precede the generic family rules
    rule(r"A\s*319.*N(?:EO)?.*|A\s*319.*(?:17[1-9]|18\d)N.*", "A319neo", "Airbus"),
    rule(r"A\s*319.*", "A319", "Airbus"),
    rule(r"A\s*320.*N(?:EO)?.*|A\s*320.*(?:27\d)N.*|A\s*320.*251N.*", "A320neo", "Airbus"),
    rule(r"A\s*320.*", "A320", "Airbus"),
    rule(r"A\s*321.*XLR.*", "A321XLR", "Airbus"),
    rule(r"A\s*321.*LR.*", "A321LR", "Airbus"),
    rule(r"A\s*321.*N(?:EO)?.*|A\s*321.*(?:25\d|27\d)N.*", "A321neo", "Airbus"),
    rule(r"A\s*321.*", "A321", "Airbus"),
    // ============ AIRBUS WIDEBODY ============
    rule(r"A\s*330.*N(?:EO)?.*|A\s*330-8.*|A\s*330-9.*", "A330neo", "Airbus"),
    rule(r"A\s*330.*300.*|A\s*330-3.*", "A330-300", "Airbus"),
    rule(r"A\s*330.*200.*|A\s*330-2.*", "A330-200", "Airbus"),
    rule(r"A\s*330.*", "A330", "Airbus"),
    rule(r"A\s*340.*600.*|A\s*340-6.*", "A340-600", "Airbus"),
    rule(r"A\s*340.*500.*|A\s*340-5.*", "A340-500", "Airbus"),
    rule(r"A\s*340.*300.*|A\s*340-3.*", "A340-300", "Airbus"),
    rule(r"A\s*340.*200.*|A\s*340-2.*", "A340-200", "Airbus"),
    rule(r"A\s*340.*", "A340", "Airbus"),
    rule(r"A\s*350.*1000.*|A\s*350-10.*", "A350-1000", "Airbus"),
    rule(r"A\s*350.*900.*|A\s*350-9.*", "A350-900", "Airbus"),
    rule(r"A\s*350.*", "A350", "Airbus"),
    rule(r"A\s*380.*", "A380", "Airbus"),
    // ============ BOEING 737 ============
    // NG customer codes (737-8H4, 737-823, ...) have a 3-character suffix and
    // must precede the MAX rules, which use the short -7/-8/-9/-10 codes
    rule(r"737-9[0-9A-Z]{2}.*|737.*NG.*900.*|737.*900.*", "737-900", "Boeing"),
    rule(r"737-8[0-9A-Z]{2}.*|737.*NG.*800.*|737.*800.*", "737-800", "Boeing"),
    rule(r"737-7[0-9A-Z]{2}.*|737.*NG.*700.*|737.*700.*", "737-700", "Boeing"),
    rule(r"737-6[0-9A-Z]{2}.*|737.*NG.*600.*|737.*600.*", "737-600", "Boeing"),
    rule(r"737.*MAX\s*10.*|737-10(?:[\s/].*)?$", "737 MAX 10", "Boeing"),
    rule(r"737.*MAX\s*9.*|737-9\s*MAX.*|737-9(?:[\s/].*)?$", "737 MAX 9", "Boeing"),
    rule(r"737.*MAX\s*8.*|737-8\s*MAX.*|737-8(?:[\s/].*)?$", "737 MAX 8", "Boeing"),
    rule(r"737.*MAX\s*7.*|737-7\s*MAX.*|737-7(?:[\s/].*)?$", "737 MAX 7", "Boeing"),
    rule(r"737.*MAX.*", "737 MAX", "Boeing"),
    rule(r"737-5\d{2}.*|737.*500.*", "737-500", "Boeing"),
    rule(r"737-4\d{2}.*|737.*400.*", "737-400", "Boeing"),
    rule(r"737-3\d{2}.*|737.*300.*", "737-300", "Boeing"),
    rule(r"737-2\d{2}.*|737.*200.*", "737-200", "Boeing"),
    rule(r"737-1\d{2}.*|737.*100.*", "737-100", "Boeing"),
    rule(r"737.*", "737", "Boeing"),
    // ============ BOEING 747 ============
    rule(r"747-8.*|747.*8[IF].*", "747-8", "Boeing"),
    rule(r"747-4\d{2}.*", "747-400", "Boeing"),
    rule(r"747-3\d{2}.*", "747-300", "Boeing"),
    rule(r"747-2\d{2}.*", "747-200", "Boeing"),
    rule(r"747-1\d{2}.*|747SP.*", "747-100", "Boeing"),
    rule(r"747.*", "747", "Boeing"),
    // ============ BOEING 757 ============
    rule(r"757-3\d{2}.*", "757-300", "Boeing"),
    rule(r"757-2\d{2}.*", "757-200", "Boeing"),
    rule(r"757.*", "757", "Boeing"),
    // ============ BOEING 767 ============
    rule(r"767-4\d{2}.*", "767-400", "Boeing"),
    rule(r"767-3\d{2}.*", "767-300", "Boeing"),
    rule(r"767-2\d{2}.*", "767-200", "Boeing"),
    rule(r"767.*", "767", "Boeing"),
    // ============ BOEING 777 ============
    rule(r"777-9.*|777X.*9.*", "777-9", "Boeing"),
    rule(r"777-8.*|777X.*8.*", "777-8", "Boeing"),
    rule(r"777.*300ER.*|777-3\d{2}ER.*|777F.*", "777-300ER", "Boeing"),
    rule(r"777-3\d{2}.*|777-300.*", "777-300", "Boeing"),
    rule(r"777.*200ER.*|777-2\d{2}ER.*", "777-200ER", "Boeing"),
    rule(r"777.*200LR.*|777-2\d{2}LR.*", "777-200LR", "Boeing"),
    rule(r"777-2\d{2}.*|777-200.*", "777-200", "Boeing"),
    rule(r"777.*", "777", "Boeing"),
    // ============ BOEING 787 ============
    rule(r"787-10.*|787.*10.*", "787-10", "Boeing"),
    rule(r"787-9.*|787.*9.*", "787-9", "Boeing"),
    rule(r"787-8.*|787.*8.*", "787-8", "Boeing"),
    rule(r"787.*", "787", "Boeing"),
    // ============ MCDONNELL DOUGLAS ============
    rule(r"MD-?11.*", "MD-11", "McDonnell Douglas"),
    rule(r"MD-?90.*", "MD-90", "McDonnell Douglas"),
    rule(r"MD-?88.*", "MD-88", "McDonnell Douglas"),
    rule(r"MD-?87.*", "MD-87", "McDonnell Douglas"),
    rule(r"MD-?83.*", "MD-83", "McDonnell Douglas"),
    rule(r"MD-?82.*", "MD-82", "McDonnell Douglas"),
    rule(r"MD-?81.*", "MD-81", "McDonnell Douglas"),
    rule(r"MD-?80.*", "MD-80", "McDonnell Douglas"),
    rule(r"DC-?10.*", "DC-10", "McDonnell Douglas"),
    rule(r"DC-?9.*", "DC-9", "McDonnell Douglas"),
    rule(r"DC-?8.*", "DC-8", "McDonnell Douglas"),
    // ============ EMBRAER E-JETS ============
    // E2 variants before the E1 family rules
    rule(r"E195-E2.*|E195.*E2.*|ERJ.*195.*E2.*|190-400.*", "E195-E2", "Embraer"),
    rule(r"E190-E2.*|E190.*E2.*|ERJ.*190.*E2.*|190-300.*", "E190-E2", "Embraer"),
    rule(r"E175-E2.*|E175.*E2.*|ERJ.*175.*E2.*", "E175-E2", "Embraer"),
    rule(r"E195.*|ERJ.*195.*|EMB.*195.*", "E195", "Embraer"),
    rule(r"E190.*|ERJ.*190.*|EMB.*190.*", "E190", "Embraer"),
    rule(r"E175.*|ERJ.*175.*|EMB.*175.*", "E175", "Embraer"),
    rule(r"E170.*|ERJ.*170.*|EMB.*170.*", "E170", "Embraer"),
    rule(r"ERJ.*145.*|EMB.*145.*|E145.*", "ERJ-145", "Embraer"),
    rule(r"ERJ.*140.*|EMB.*140.*|E140.*", "ERJ-140", "Embraer"),
    rule(r"ERJ.*135.*|EMB.*135.*|E135.*", "ERJ-135", "Embraer"),
    // ============ BOMBARDIER/CANADAIR ============
    // CRJ marketing names and the CL-600 type-certificate codes
    rule(r"CRJ.*1000.*|CL-?600.*2E25.*", "CRJ-1000", "Bombardier"),
    rule(r"CRJ.*900.*|CL-?600.*2D24.*", "CRJ-900", "Bombardier"),
    rule(r"CRJ.*700.*|CL-?600.*2C10.*", "CRJ-700", "Bombardier"),
    rule(r"CRJ.*550.*", "CRJ-550", "Bombardier"),
    rule(r"CRJ.*200.*|CL-?600.*2B19.*", "CRJ-200", "Bombardier"),
    rule(r"CRJ.*100.*", "CRJ-100", "Bombardier"),
    rule(r"CRJ.*", "CRJ", "Bombardier"),
    rule(r"DHC-?8.*400.*|Q400.*|DASH\s*8.*400.*", "Dash 8-400", "De Havilland Canada"),
    rule(r"DHC-?8.*300.*|Q300.*|DASH\s*8.*300.*", "Dash 8-300", "De Havilland Canada"),
    rule(r"DHC-?8.*200.*|Q200.*|DASH\s*8.*200.*", "Dash 8-200", "De Havilland Canada"),
    rule(r"DHC-?8.*100.*|Q100.*|DASH\s*8.*100.*", "Dash 8-100", "De Havilland Canada"),
    rule(r"DHC-?8.*|DASH\s*8.*", "Dash 8", "De Havilland Canada"),
    // ============ ATR ============
    rule(r"ATR.*72.*", "ATR 72", "ATR"),
    rule(r"ATR.*42.*", "ATR 42", "ATR"),
    // ============ CESSNA JETS ============
    rule(r"CITATION\s*LATITUDE.*|C?680A.*", "Citation Latitude", "Cessna"),
    rule(r"CITATION\s*SOVEREIGN.*|C?680.*", "Citation Sovereign", "Cessna"),
    rule(r"CITATION\s*LONGITUDE.*|C?700.*", "Citation Longitude", "Cessna"),
    rule(r"CITATION\s*X\+?.*|C?750.*", "Citation X", "Cessna"),
    rule(r"CITATION\s*EXCEL.*|C?560XL.*", "Citation Excel", "Cessna"),
    rule(r"CITATION\s*CJ4.*|C?525C.*", "Citation CJ4", "Cessna"),
    rule(r"CITATION\s*CJ3.*|C?525B.*", "Citation CJ3", "Cessna"),
    rule(r"CITATION\s*CJ2.*|C?525A.*", "Citation CJ2", "Cessna"),
    rule(r"CITATION\s*CJ1.*|C?525.*", "Citation CJ1", "Cessna"),
    rule(r"CITATION\s*MUSTANG.*|C?510.*", "Citation Mustang", "Cessna"),
    rule(r"CITATION\s*M2.*", "Citation M2", "Cessna"),
    rule(r"CITATION.*", "Citation", "Cessna"),
    // ============ CESSNA PROPS ============
    rule(r"(?:CESSNA\s*)?172.*|C172.*", "172 Skyhawk", "Cessna"),
    rule(r"(?:CESSNA\s*)?182.*|C182.*", "182 Skylane", "Cessna"),
    rule(r"(?:CESSNA\s*)?206.*|C206.*|T206.*|U206.*", "206 Stationair", "Cessna"),
    rule(r"(?:CESSNA\s*)?208.*|C208.*|CARAVAN.*", "208 Caravan", "Cessna"),
    rule(r"(?:CESSNA\s*)?210.*|C210.*|T210.*", "210 Centurion", "Cessna"),
    rule(r"(?:CESSNA\s*)?150.*|C150.*", "150", "Cessna"),
    rule(r"(?:CESSNA\s*)?152.*|C152.*", "152", "Cessna"),
    // ============ PIPER ============
    // Named PA-28/PA-32 variants before the bare type-code rules
    rule(r"PA-?28.*CHEROKEE.*|CHEROKEE(?:\s.*|$)", "Cherokee", "Piper"),
    rule(r"PA-?28.*WARRIOR.*|WARRIOR.*", "Warrior", "Piper"),
    rule(r"PA-?28.*ARCHER.*|ARCHER.*", "Archer", "Piper"),
    rule(r"PA-?28.*ARROW.*|ARROW.*", "Arrow", "Piper"),
    rule(r"PA-?28.*", "PA-28", "Piper"),
    rule(r"PA-?32.*SARATOGA.*|SARATOGA.*", "Saratoga", "Piper"),
    rule(r"PA-?32.*LANCE.*|LANCE.*", "Lance", "Piper"),
    rule(r"PA-?32.*CHEROKEE\s*SIX.*|CHEROKEE\s*SIX.*", "Cherokee Six", "Piper"),
    rule(r"PA-?32.*", "PA-32", "Piper"),
    rule(r"PA-?34.*SENECA.*|SENECA.*", "Seneca", "Piper"),
    rule(r"PA-?34.*", "PA-34", "Piper"),
    rule(r"PA-?44.*SEMINOLE.*|SEMINOLE.*", "Seminole", "Piper"),
    rule(r"PA-?46.*MALIBU.*|MALIBU.*|M350.*|M500.*|M600.*", "Malibu", "Piper"),
    rule(r"PA-?46.*", "PA-46", "Piper"),
    rule(r"CUB.*|PA-?18.*", "Cub", "Piper"),
    // ============ CIRRUS ============
    rule(r"SR22T?.*G6.*", "SR22 G6", "Cirrus"),
    rule(r"SR22T.*", "SR22T", "Cirrus"),
    rule(r"SR22.*", "SR22", "Cirrus"),
    rule(r"SR20.*", "SR20", "Cirrus"),
    rule(r"SF50.*|VISION\s*JET.*", "Vision Jet", "Cirrus"),
    // ============ PILATUS ============
    // Before Beechcraft so PC-12 never reaches the C-12/King Air rule
    rule(r"PC-?24.*", "PC-24", "Pilatus"),
    rule(r"PC-?12.*", "PC-12", "Pilatus"),
    rule(r"PC-?6.*", "PC-6", "Pilatus"),
    // ============ BEECHCRAFT ============
    rule(r"KING\s*AIR\s*350.*|B350.*|BE350.*|C-12.*", "King Air 350", "Beechcraft"),
    rule(r"KING\s*AIR\s*250.*|B250.*|BE250.*", "King Air 250", "Beechcraft"),
    rule(r"KING\s*AIR\s*200.*|B200.*|BE200.*", "King Air 200", "Beechcraft"),
    rule(r"KING\s*AIR\s*90.*|C90.*|BE9\d?.*", "King Air 90", "Beechcraft"),
    rule(r"KING\s*AIR.*", "King Air", "Beechcraft"),
    rule(r"BONANZA.*|V35.*|A36.*|G36.*|BE35.*|BE36.*", "Bonanza", "Beechcraft"),
    rule(r"BARON.*|BE58.*|BE55.*", "Baron", "Beechcraft"),
    rule(r"PREMIER.*|BE390.*", "Premier", "Beechcraft"),
    // ============ GULFSTREAM ============
    // GVII/GVI designators before the bare GV rule they would shadow; the
    // dashed G-VI form belongs to the G600 and must come after the bare GVI
    rule(r"G700.*|GVII.*", "G700", "Gulfstream"),
    rule(r"G650.*|GVI.*", "G650", "Gulfstream"),
    rule(r"G600.*|G-VI.*", "G600", "Gulfstream"),
    rule(r"G550.*|GV.*550.*", "G550", "Gulfstream"),
    rule(r"G500.*", "G500", "Gulfstream"),
    rule(r"G450.*|GIV.*450.*", "G450", "Gulfstream"),
    rule(r"G280.*", "G280", "Gulfstream"),
    rule(r"GV.*|G-V.*", "G-V", "Gulfstream"),
    rule(r"GIV.*|G-?IV.*", "G-IV", "Gulfstream"),
    rule(r"GIII.*|G-?III.*", "G-III", "Gulfstream"),
    // ============ DASSAULT FALCON ============
    rule(r"FALCON\s*10X.*", "Falcon 10X", "Dassault"),
    rule(r"FALCON\s*8X.*", "Falcon 8X", "Dassault"),
    rule(r"FALCON\s*7X.*", "Falcon 7X", "Dassault"),
    rule(r"FALCON\s*900.*", "Falcon 900", "Dassault"),
    rule(r"FALCON\s*2000.*", "Falcon 2000", "Dassault"),
    rule(r"FALCON\s*50.*", "Falcon 50", "Dassault"),
    rule(r"FALCON.*", "Falcon", "Dassault"),
    // ============ LEARJET ============
    rule(r"LEARJET\s*75.*|LJ75.*", "Learjet 75", "Learjet"),
    rule(r"LEARJET\s*70.*|LJ70.*", "Learjet 70", "Learjet"),
    rule(r"LEARJET\s*60.*|LJ60.*", "Learjet 60", "Learjet"),
    rule(r"LEARJET\s*45.*|LJ45.*", "Learjet 45", "Learjet"),
    rule(r"LEARJET\s*40.*|LJ40.*", "Learjet 40", "Learjet"),
    rule(r"LEARJET\s*35.*|LJ35.*", "Learjet 35", "Learjet"),
    rule(r"LEARJET\s*31.*|LJ31.*", "Learjet 31", "Learjet"),
    rule(r"LEARJET.*", "Learjet", "Learjet"),
    // ============ DIAMOND ============
    rule(r"DA-?62.*", "DA62", "Diamond"),
    rule(r"DA-?42.*", "DA42", "Diamond"),
    rule(r"DA-?40.*", "DA40", "Diamond"),
    rule(r"DA-?20.*", "DA20", "Diamond"),
    // ============ HELICOPTERS ============
    rule(r"R44.*", "R44", "Robinson"),
    rule(r"R22.*", "R22", "Robinson"),
    rule(r"R66.*", "R66", "Robinson"),
    rule(r"BELL\s*206.*|206B.*|JETRANGER.*", "206 JetRanger", "Bell"),
    rule(r"BELL\s*407.*|407.*", "407", "Bell"),
    rule(r"BELL\s*412.*|412.*", "412", "Bell"),
    rule(r"BELL\s*429.*|429.*", "429", "Bell"),
    rule(r"BELL\s*505.*|505.*", "505", "Bell"),
    rule(r"BELL\s*525.*|525.*", "525 Relentless", "Bell"),
    rule(r"H125.*|AS350.*|ECUREUIL.*|ASTAR.*", "H125", "Airbus Helicopters"),
    rule(r"H130.*|EC130.*", "H130", "Airbus Helicopters"),
    rule(r"H135.*|EC135.*", "H135", "Airbus Helicopters"),
    rule(r"H145.*|EC145.*|BK117.*", "H145", "Airbus Helicopters"),
    rule(r"H160.*", "H160", "Airbus Helicopters"),
    rule(r"H175.*|EC175.*", "H175", "Airbus Helicopters"),
    rule(r"H215.*|AS332.*|SUPER\s*PUMA.*", "H215", "Airbus Helicopters"),
    rule(r"H225.*|EC225.*", "H225", "Airbus Helicopters"),
    rule(r"S-?76.*", "S-76", "Sikorsky"),
    rule(r"S-?92.*", "S-92", "Sikorsky"),
    rule(r"S-?70.*|UH-?60.*|BLACK\s*HAWK.*", "S-70/UH-60", "Sikorsky"),
    rule(r"AW139.*", "AW139", "Leonardo"),
    rule(r"AW109.*", "AW109", "Leonardo"),
    rule(r"AW169.*", "AW169", "Leonardo"),
    rule(r"AW189.*", "AW189", "Leonardo"),
];

/// Manufacturer alias table: raw uppercase name -> canonical display name.
///
/// Matched by case-insensitive exact comparison on the trimmed raw string.
pub const MANUFACTURER_ALIASES: &[(&str, &str)] = &[
    ("AIRBUS", "Airbus"),
    ("AIRBUS INDUSTRIE", "Airbus"),
    ("THE BOEING COMPANY", "Boeing"),
    ("BOEING", "Boeing"),
    ("BOEING COMPANY", "Boeing"),
    ("EMBRAER", "Embraer"),
    ("EMBRAER S.A.", "Embraer"),
    ("EMBRAER-EMPRESA BRASILEIRA DE AERONAUTICA", "Embraer"),
    ("BOMBARDIER", "Bombardier"),
    ("BOMBARDIER INC", "Bombardier"),
    ("BOMBARDIER INC.", "Bombardier"),
    ("CESSNA", "Cessna"),
    ("CESSNA AIRCRAFT", "Cessna"),
    ("CESSNA AIRCRAFT COMPANY", "Cessna"),
    ("TEXTRON AVIATION", "Cessna"),
    ("TEXTRON AVIATION INC", "Cessna"),
    ("TEXTRON AVIATION INC.", "Cessna"),
    ("PIPER", "Piper"),
    ("PIPER AIRCRAFT", "Piper"),
    ("PIPER AIRCRAFT INC", "Piper"),
    ("PIPER AIRCRAFT, INC.", "Piper"),
    ("CIRRUS", "Cirrus"),
    ("CIRRUS DESIGN", "Cirrus"),
    ("CIRRUS DESIGN CORP", "Cirrus"),
    ("CIRRUS DESIGN CORPORATION", "Cirrus"),
    ("BEECH", "Beechcraft"),
    ("BEECHCRAFT", "Beechcraft"),
    ("BEECH AIRCRAFT", "Beechcraft"),
    ("BEECH AIRCRAFT CORP", "Beechcraft"),
    ("HAWKER BEECHCRAFT", "Beechcraft"),
    ("HAWKER BEECHCRAFT CORP", "Beechcraft"),
    ("RAYTHEON AIRCRAFT", "Beechcraft"),
    ("RAYTHEON AIRCRAFT COMPANY", "Beechcraft"),
    ("GULFSTREAM", "Gulfstream"),
    ("GULFSTREAM AEROSPACE", "Gulfstream"),
    ("GULFSTREAM AEROSPACE CORP", "Gulfstream"),
    ("DASSAULT", "Dassault"),
    ("DASSAULT AVIATION", "Dassault"),
    ("DASSAULT-BREGUET", "Dassault"),
    ("LEARJET", "Learjet"),
    ("LEARJET INC", "Learjet"),
    ("MCDONNELL DOUGLAS", "McDonnell Douglas"),
    ("MCDONNELL DOUGLAS CORPORATION", "McDonnell Douglas"),
    ("LOCKHEED", "Lockheed"),
    ("LOCKHEED MARTIN", "Lockheed"),
    ("LOCKHEED CORPORATION", "Lockheed"),
    ("ATR", "ATR"),
    ("ATR - GIE AVIONS DE TRANSPORT REGIONAL", "ATR"),
    ("AVIONS DE TRANSPORT REGIONAL", "ATR"),
    ("DE HAVILLAND", "De Havilland"),
    ("DE HAVILLAND CANADA", "De Havilland Canada"),
    ("DIAMOND", "Diamond"),
    ("DIAMOND AIRCRAFT", "Diamond"),
    ("DIAMOND AIRCRAFT INDUSTRIES", "Diamond"),
    ("MOONEY", "Mooney"),
    ("MOONEY AIRCRAFT", "Mooney"),
    ("MOONEY INTERNATIONAL", "Mooney"),
    ("PILATUS", "Pilatus"),
    ("PILATUS AIRCRAFT", "Pilatus"),
    ("PILATUS AIRCRAFT LTD", "Pilatus"),
    ("ROBINSON", "Robinson"),
    ("ROBINSON HELICOPTER", "Robinson"),
    ("ROBINSON HELICOPTER COMPANY", "Robinson"),
    ("BELL", "Bell"),
    ("BELL HELICOPTER", "Bell"),
    ("BELL TEXTRON", "Bell"),
    ("SIKORSKY", "Sikorsky"),
    ("SIKORSKY AIRCRAFT", "Sikorsky"),
    ("EUROCOPTER", "Airbus Helicopters"),
    ("AIRBUS HELICOPTERS", "Airbus Helicopters"),
    ("LEONARDO", "Leonardo"),
    ("LEONARDO HELICOPTERS", "Leonardo"),
    ("AGUSTA", "Leonardo"),
    ("AGUSTAWESTLAND", "Leonardo"),
    ("DAHER", "Daher"),
    ("DAHER-SOCATA", "Daher"),
    ("SOCATA", "Daher"),
];
