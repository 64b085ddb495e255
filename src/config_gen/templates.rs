/// Each INI target with its full content. Add new targets here.
pub const INI_TEMPLATES: [(&str, &[&str]); 3] = [
    (
        "cpath.ini",
        &[
            "GraphicInfo:D:/Bin/GraphicInfo_66.bin",
            "Graphic:D:/Bin/Graphic_66.bin",
            "Anime:D:/Bin/Anime_4.bin",
            "AnimeInfo:D:/Bin/AnimeInfo_4.bin",
            "PAL:D:/Bin/pal/Palet_00.cgp",
            "GraphicInfoEx:D:/Bin/GraphicInfoEx_5.bin",
            "GraphicEx:D:/Bin/GraphicEx_5.bin",
            "AnimeEx:D:/Bin/AnimeEx_1.bin",
            "AnimeInfoEx:D:/Bin/AnimeInfoEx_1.bin",
            "Map:mapadrn_2.bin",
        ],
    ),
    (
        "puk2-cpath.ini",
        &[
            "GraphicInfo:D:/Bin/GraphicInfo_20.bin",
            "Graphic:D:/Bin/Graphic_20.bin",
            "Anime:D:/Bin/Anime_3.bin",
            "AnimeInfo:D:/Bin/AnimeInfo_3.bin",
            "PAL:D:/Bin/pal/Palet_00.cgp",
            "GraphicInfoEx:D:/Bin/Puk2/GraphicInfo_PUK2_2.bin",
            "GraphicEx:D:/Bin/Puk2/Graphic_PUK2_2.bin",
            "AnimeEx:D:/Bin/Puk2/Anime_PUK2_4.bin",
            "AnimeInfoEx:D:/Bin/Puk2/AnimeInfo_PUK2_4.bin",
            "Map:mapadrn_2.bin",
        ],
    ),
    (
        "puk3-cpath.ini",
        &[
            "GraphicInfo:D:/Bin/GraphicInfo_20.bin",
            "Graphic:D:/Bin/Graphic_20.bin",
            "Anime:D:/Bin/Anime_3.bin",
            "AnimeInfo:D:/Bin/AnimeInfo_3.bin",
            "PAL:D:/Bin/pal/Palet_00.cgp",
            "GraphicInfoEx:D:/Bin/Puk3/GraphicInfo_PUK3_1.bin",
            "GraphicEx:D:/Bin/Puk3/Graphic_PUK3_1.bin",
            "AnimeEx:D:/Bin/Puk3/Anime_PUK3_2.bin",
            "AnimeInfoEx:D:/Bin/Puk3/AnimeInfo_PUK3_2.bin",
            "Map:mapadrn_2.bin",
        ],
    ),
];

/// Lines for `file_name`, or none for a name outside the table.
pub fn generate_ini(file_name: &str) -> &'static [&'static str] {
    INI_TEMPLATES
        .iter()
        .find(|(name, _)| *name == file_name)
        .map(|(_, lines)| *lines)
        .unwrap_or(&[])
}
