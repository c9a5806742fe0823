//! Latin single-byte encodings.
//!
//! Each row is `(glyph name, character, [standard, mac_roman, win_ansi,
//! pdf_doc])`; a code of 0 means the glyph has no slot in that encoding.
//! A glyph name may appear more than once when several encodings place
//! different characters under it; name lookups use the first row.

pub const ENCODING: &[(&str, char, [u8; 4])] = &[
    ("A", 'A', [65, 65, 65, 65]),
    ("AE", '\u{00c6}', [225, 174, 198, 198]),
    ("Aacute", '\u{00c1}', [0, 231, 193, 193]),
    ("Acircumflex", '\u{00c2}', [0, 229, 194, 194]),
    ("Adieresis", '\u{00c4}', [0, 128, 196, 196]),
    ("Agrave", '\u{00c0}', [0, 203, 192, 192]),
    ("Aring", '\u{00c5}', [0, 129, 197, 197]),
    ("Atilde", '\u{00c3}', [0, 204, 195, 195]),
    ("B", 'B', [66, 66, 66, 66]),
    ("C", 'C', [67, 67, 67, 67]),
    ("Ccedilla", '\u{00c7}', [0, 130, 199, 199]),
    ("D", 'D', [68, 68, 68, 68]),
    ("E", 'E', [69, 69, 69, 69]),
    ("Eacute", '\u{00c9}', [0, 131, 201, 201]),
    ("Ecircumflex", '\u{00ca}', [0, 230, 202, 202]),
    ("Edieresis", '\u{00cb}', [0, 232, 203, 203]),
    ("Egrave", '\u{00c8}', [0, 233, 200, 200]),
    ("Eth", '\u{00d0}', [0, 0, 208, 208]),
    ("Euro", '\u{20ac}', [0, 0, 128, 160]),
    ("F", 'F', [70, 70, 70, 70]),
    ("G", 'G', [71, 71, 71, 71]),
    ("H", 'H', [72, 72, 72, 72]),
    ("I", 'I', [73, 73, 73, 73]),
    ("Iacute", '\u{00cd}', [0, 234, 205, 205]),
    ("Icircumflex", '\u{00ce}', [0, 235, 206, 206]),
    ("Idieresis", '\u{00cf}', [0, 236, 207, 207]),
    ("Igrave", '\u{00cc}', [0, 237, 204, 204]),
    ("J", 'J', [74, 74, 74, 74]),
    ("K", 'K', [75, 75, 75, 75]),
    ("L", 'L', [76, 76, 76, 76]),
    ("Lslash", '\u{0141}', [232, 0, 0, 149]),
    ("M", 'M', [77, 77, 77, 77]),
    ("N", 'N', [78, 78, 78, 78]),
    ("Ntilde", '\u{00d1}', [0, 132, 209, 209]),
    ("O", 'O', [79, 79, 79, 79]),
    ("OE", '\u{0152}', [234, 206, 140, 150]),
    ("Oacute", '\u{00d3}', [0, 238, 211, 211]),
    ("Ocircumflex", '\u{00d4}', [0, 239, 212, 212]),
    ("Odieresis", '\u{00d6}', [0, 133, 214, 214]),
    ("Ograve", '\u{00d2}', [0, 241, 210, 210]),
    ("Oslash", '\u{00d8}', [233, 175, 216, 216]),
    ("Otilde", '\u{00d5}', [0, 205, 213, 213]),
    ("P", 'P', [80, 80, 80, 80]),
    ("Q", 'Q', [81, 81, 81, 81]),
    ("R", 'R', [82, 82, 82, 82]),
    ("S", 'S', [83, 83, 83, 83]),
    ("Scaron", '\u{0160}', [0, 0, 138, 151]),
    ("T", 'T', [84, 84, 84, 84]),
    ("Thorn", '\u{00de}', [0, 0, 222, 222]),
    ("U", 'U', [85, 85, 85, 85]),
    ("Uacute", '\u{00da}', [0, 242, 218, 218]),
    ("Ucircumflex", '\u{00db}', [0, 243, 219, 219]),
    ("Udieresis", '\u{00dc}', [0, 134, 220, 220]),
    ("Ugrave", '\u{00d9}', [0, 244, 217, 217]),
    ("V", 'V', [86, 86, 86, 86]),
    ("W", 'W', [87, 87, 87, 87]),
    ("X", 'X', [88, 88, 88, 88]),
    ("Y", 'Y', [89, 89, 89, 89]),
    ("Yacute", '\u{00dd}', [0, 0, 221, 221]),
    ("Ydieresis", '\u{0178}', [0, 217, 159, 152]),
    ("Z", 'Z', [90, 90, 90, 90]),
    ("Zcaron", '\u{017d}', [0, 0, 142, 153]),
    ("a", 'a', [97, 97, 97, 97]),
    ("aacute", '\u{00e1}', [0, 135, 225, 225]),
    ("acircumflex", '\u{00e2}', [0, 137, 226, 226]),
    ("acute", '\u{00b4}', [194, 171, 180, 180]),
    ("adieresis", '\u{00e4}', [0, 138, 228, 228]),
    ("ae", '\u{00e6}', [241, 190, 230, 230]),
    ("agrave", '\u{00e0}', [0, 136, 224, 224]),
    ("ampersand", '&', [38, 38, 38, 38]),
    ("aring", '\u{00e5}', [0, 140, 229, 229]),
    ("asciicircum", '^', [94, 94, 94, 94]),
    ("asciitilde", '~', [126, 126, 126, 126]),
    ("asterisk", '*', [42, 42, 42, 42]),
    ("at", '@', [64, 64, 64, 64]),
    ("atilde", '\u{00e3}', [0, 139, 227, 227]),
    ("b", 'b', [98, 98, 98, 98]),
    ("backslash", '\\', [92, 92, 92, 92]),
    ("bar", '|', [124, 124, 124, 124]),
    ("braceleft", '{', [123, 123, 123, 123]),
    ("braceright", '}', [125, 125, 125, 125]),
    ("bracketleft", '[', [91, 91, 91, 91]),
    ("bracketright", ']', [93, 93, 93, 93]),
    ("breve", '\u{02d8}', [198, 249, 0, 24]),
    ("brokenbar", '\u{00a6}', [0, 0, 166, 166]),
    ("bullet", '\u{2022}', [183, 165, 149, 128]),
    ("c", 'c', [99, 99, 99, 99]),
    ("caron", '\u{02c7}', [207, 255, 0, 25]),
    ("ccedilla", '\u{00e7}', [0, 141, 231, 231]),
    ("cedilla", '\u{00b8}', [203, 252, 184, 184]),
    ("cent", '\u{00a2}', [162, 162, 162, 162]),
    ("circumflex", '\u{02c6}', [195, 246, 136, 26]),
    ("colon", ':', [58, 58, 58, 58]),
    ("comma", ',', [44, 44, 44, 44]),
    ("copyright", '\u{00a9}', [0, 169, 169, 169]),
    ("currency", '\u{00a4}', [168, 219, 164, 164]),
    ("d", 'd', [100, 100, 100, 100]),
    ("dagger", '\u{2020}', [178, 160, 134, 129]),
    ("daggerdbl", '\u{2021}', [179, 224, 135, 130]),
    ("degree", '\u{00b0}', [0, 161, 176, 176]),
    ("dieresis", '\u{00a8}', [200, 172, 168, 168]),
    ("divide", '\u{00f7}', [0, 214, 247, 247]),
    ("dollar", '$', [36, 36, 36, 36]),
    ("dotaccent", '\u{02d9}', [199, 250, 0, 27]),
    ("dotlessi", '\u{0131}', [245, 245, 0, 154]),
    ("e", 'e', [101, 101, 101, 101]),
    ("eacute", '\u{00e9}', [0, 142, 233, 233]),
    ("ecircumflex", '\u{00ea}', [0, 144, 234, 234]),
    ("edieresis", '\u{00eb}', [0, 145, 235, 235]),
    ("egrave", '\u{00e8}', [0, 143, 232, 232]),
    ("eight", '8', [56, 56, 56, 56]),
    ("ellipsis", '\u{2026}', [188, 201, 133, 131]),
    ("emdash", '\u{2014}', [208, 209, 151, 132]),
    ("endash", '\u{2013}', [177, 208, 150, 133]),
    ("equal", '=', [61, 61, 61, 61]),
    ("eth", '\u{00f0}', [0, 0, 240, 240]),
    ("exclam", '!', [33, 33, 33, 33]),
    ("exclamdown", '\u{00a1}', [161, 193, 161, 161]),
    ("f", 'f', [102, 102, 102, 102]),
    ("fi", '\u{fb01}', [174, 222, 0, 147]),
    ("five", '5', [53, 53, 53, 53]),
    ("fl", '\u{fb02}', [175, 223, 0, 148]),
    ("florin", '\u{0192}', [166, 196, 131, 134]),
    ("four", '4', [52, 52, 52, 52]),
    ("fraction", '\u{2044}', [164, 218, 0, 135]),
    ("g", 'g', [103, 103, 103, 103]),
    ("germandbls", '\u{00df}', [251, 167, 223, 223]),
    ("grave", '`', [193, 96, 96, 96]),
    ("greater", '>', [62, 62, 62, 62]),
    ("guillemotleft", '\u{00ab}', [171, 199, 171, 171]),
    ("guillemotright", '\u{00bb}', [187, 200, 187, 187]),
    ("guilsinglleft", '\u{2039}', [172, 220, 139, 136]),
    ("guilsinglright", '\u{203a}', [173, 221, 155, 137]),
    ("h", 'h', [104, 104, 104, 104]),
    ("hungarumlaut", '\u{02dd}', [205, 253, 0, 28]),
    ("hyphen", '-', [45, 45, 45, 45]),
    ("i", 'i', [105, 105, 105, 105]),
    ("iacute", '\u{00ed}', [0, 146, 237, 237]),
    ("icircumflex", '\u{00ee}', [0, 148, 238, 238]),
    ("idieresis", '\u{00ef}', [0, 149, 239, 239]),
    ("igrave", '\u{00ec}', [0, 147, 236, 236]),
    ("j", 'j', [106, 106, 106, 106]),
    ("k", 'k', [107, 107, 107, 107]),
    ("l", 'l', [108, 108, 108, 108]),
    ("less", '<', [60, 60, 60, 60]),
    ("logicalnot", '\u{00ac}', [0, 194, 172, 172]),
    ("lslash", '\u{0142}', [248, 0, 0, 155]),
    ("m", 'm', [109, 109, 109, 109]),
    ("macron", '\u{00af}', [197, 248, 175, 175]),
    ("minus", '\u{2212}', [0, 0, 0, 138]),
    ("mu", '\u{00b5}', [0, 181, 181, 181]),
    ("multiply", '\u{00d7}', [0, 0, 215, 215]),
    ("n", 'n', [110, 110, 110, 110]),
    ("nbspace", '\u{00a0}', [0, 202, 160, 0]),
    ("nine", '9', [57, 57, 57, 57]),
    ("ntilde", '\u{00f1}', [0, 150, 241, 241]),
    ("numbersign", '#', [35, 35, 35, 35]),
    ("o", 'o', [111, 111, 111, 111]),
    ("oacute", '\u{00f3}', [0, 151, 243, 243]),
    ("ocircumflex", '\u{00f4}', [0, 153, 244, 244]),
    ("odieresis", '\u{00f6}', [0, 154, 246, 246]),
    ("oe", '\u{0153}', [250, 207, 156, 156]),
    ("ogonek", '\u{02db}', [206, 254, 0, 29]),
    ("ograve", '\u{00f2}', [0, 152, 242, 242]),
    ("one", '1', [49, 49, 49, 49]),
    ("onehalf", '\u{00bd}', [0, 0, 189, 189]),
    ("onequarter", '\u{00bc}', [0, 0, 188, 188]),
    ("onesuperior", '\u{00b9}', [0, 0, 185, 185]),
    ("ordfeminine", '\u{00aa}', [227, 187, 170, 170]),
    ("ordmasculine", '\u{00ba}', [235, 188, 186, 186]),
    ("oslash", '\u{00f8}', [249, 191, 248, 248]),
    ("otilde", '\u{00f5}', [0, 155, 245, 245]),
    ("p", 'p', [112, 112, 112, 112]),
    ("paragraph", '\u{00b6}', [182, 166, 182, 182]),
    ("parenleft", '(', [40, 40, 40, 40]),
    ("parenright", ')', [41, 41, 41, 41]),
    ("percent", '%', [37, 37, 37, 37]),
    ("period", '.', [46, 46, 46, 46]),
    ("periodcentered", '\u{00b7}', [180, 225, 183, 183]),
    ("perthousand", '\u{2030}', [189, 228, 137, 139]),
    ("plus", '+', [43, 43, 43, 43]),
    ("plusminus", '\u{00b1}', [0, 177, 177, 177]),
    ("q", 'q', [113, 113, 113, 113]),
    ("question", '?', [63, 63, 63, 63]),
    ("questiondown", '\u{00bf}', [191, 192, 191, 191]),
    ("quotedbl", '"', [34, 34, 34, 34]),
    ("quotedblbase", '\u{201e}', [185, 227, 132, 140]),
    ("quotedblleft", '\u{201c}', [170, 210, 147, 141]),
    ("quotedblright", '\u{201d}', [186, 211, 148, 142]),
    ("quoteleft", '\u{2018}', [96, 212, 145, 143]),
    ("quoteright", '\u{2019}', [39, 213, 146, 144]),
    ("quotesinglbase", '\u{201a}', [184, 226, 130, 145]),
    ("quotesingle", '\'', [169, 39, 39, 39]),
    ("r", 'r', [114, 114, 114, 114]),
    ("registered", '\u{00ae}', [0, 168, 174, 174]),
    ("ring", '\u{02da}', [202, 251, 0, 30]),
    ("s", 's', [115, 115, 115, 115]),
    ("scaron", '\u{0161}', [0, 0, 154, 157]),
    ("section", '\u{00a7}', [167, 164, 167, 167]),
    ("semicolon", ';', [59, 59, 59, 59]),
    ("seven", '7', [55, 55, 55, 55]),
    ("six", '6', [54, 54, 54, 54]),
    ("slash", '/', [47, 47, 47, 47]),
    ("space", '\u{0020}', [32, 32, 32, 32]),
    ("space", '\u{00a0}', [0, 202, 160, 0]),
    ("space", '\u{00ad}', [0, 202, 173, 0]),
    ("sterling", '\u{00a3}', [163, 163, 163, 163]),
    ("t", 't', [116, 116, 116, 116]),
    ("thorn", '\u{00fe}', [0, 0, 254, 254]),
    ("three", '3', [51, 51, 51, 51]),
    ("threequarters", '\u{00be}', [0, 0, 190, 190]),
    ("threesuperior", '\u{00b3}', [0, 0, 179, 179]),
    ("tilde", '\u{02dc}', [196, 247, 152, 31]),
    ("trademark", '\u{2122}', [0, 170, 153, 146]),
    ("two", '2', [50, 50, 50, 50]),
    ("twosuperior", '\u{00b2}', [0, 0, 178, 178]),
    ("u", 'u', [117, 117, 117, 117]),
    ("uacute", '\u{00fa}', [0, 156, 250, 250]),
    ("ucircumflex", '\u{00fb}', [0, 158, 251, 251]),
    ("udieresis", '\u{00fc}', [0, 159, 252, 252]),
    ("ugrave", '\u{00f9}', [0, 157, 249, 249]),
    ("underscore", '_', [95, 95, 95, 95]),
    ("v", 'v', [118, 118, 118, 118]),
    ("w", 'w', [119, 119, 119, 119]),
    ("x", 'x', [120, 120, 120, 120]),
    ("y", 'y', [121, 121, 121, 121]),
    ("yacute", '\u{00fd}', [0, 0, 253, 253]),
    ("ydieresis", '\u{00ff}', [0, 216, 255, 255]),
    ("yen", '\u{00a5}', [165, 180, 165, 165]),
    ("z", 'z', [122, 122, 122, 122]),
    ("zcaron", '\u{017e}', [0, 0, 158, 158]),
    ("zero", '0', [48, 48, 48, 48]),
];
