//! Components, files, features, and disk layout

tuple_definition! {
    /// An installable unit: the atom of install/uninstall bookkeeping
    Component => COMPONENT, ComponentTupleFields, ComponentTuple {
        /// Component GUID, or empty for an unmanaged component
        ComponentId / component_id / set_component_id : String,
        DirectoryRef / directory_ref / set_directory_ref : String,
        Condition / condition / set_condition : opt String,
        /// Reference to the resource that decides install state
        KeyPath / key_path / set_key_path : opt String,
        Location / location / set_location : Number,
        NeverOverwrite / never_overwrite / set_never_overwrite : Bool,
        Permanent / permanent / set_permanent : Bool,
        Shared / shared / set_shared : Bool,
        Win64 / win64 / set_win64 : Bool,
    }
}

tuple_definition! {
    /// A node in the target directory tree
    Directory => DIRECTORY, DirectoryTupleFields, DirectoryTuple {
        ParentDirectoryRef / parent_directory_ref / set_parent_directory_ref : opt String,
        Name / name / set_name : String,
        ShortName / short_name / set_short_name : opt String,
        SourceName / source_name / set_source_name : opt String,
        SourceShortName / source_short_name / set_source_short_name : opt String,
    }
}

tuple_definition! {
    /// A user-selectable unit of functionality
    Feature => FEATURE, FeatureTupleFields, FeatureTuple {
        ParentFeatureRef / parent_feature_ref / set_parent_feature_ref : opt String,
        Title / title / set_title : opt String,
        Description / description / set_description : opt String,
        Display / display / set_display : Number,
        Level / level / set_level : Number,
        DirectoryRef / directory_ref / set_directory_ref : opt String,
        DisallowAbsent / disallow_absent / set_disallow_absent : Bool,
        DisallowAdvertise / disallow_advertise / set_disallow_advertise : Bool,
        InstallDefault / install_default / set_install_default : Number,
        TypicalDefault / typical_default / set_typical_default : Number,
    }
}

tuple_definition! {
    /// Membership row tying a component to a feature
    FeatureComponents => FEATURE_COMPONENTS, FeatureComponentsTupleFields, FeatureComponentsTuple {
        FeatureRef / feature_ref / set_feature_ref : String,
        ComponentRef / component_ref / set_component_ref : String,
    }
}

tuple_definition! {
    /// A file carried by a component
    File => FILE, FileTupleFields, FileTuple {
        ComponentRef / component_ref / set_component_ref : String,
        Name / name / set_name : String,
        ShortName / short_name / set_short_name : opt String,
        FileSize / file_size / set_file_size : opt Number,
        Version / version / set_version : opt String,
        Language / language / set_language : opt String,
        ReadOnly / read_only / set_read_only : opt Bool,
        Hidden / hidden / set_hidden : opt Bool,
        System / system / set_system : opt Bool,
        Vital / vital / set_vital : Bool,
        Checksum / checksum / set_checksum : opt Bool,
        Compressed / compressed / set_compressed : opt Bool,
        /// Path the binder reads the payload from at layout time
        Source / source_path / set_source_path : Path,
        Sequence / sequence / set_sequence : opt Number,
        DiskId / disk_id / set_disk_id : opt Number,
    }
}

tuple_definition! {
    /// One installation disk: cabinet, prompt, and sequence range
    Media => MEDIA, MediaTupleFields, MediaTuple {
        DiskId / disk_id / set_disk_id : Number,
        LastSequence / last_sequence / set_last_sequence : opt Number,
        DiskPrompt / disk_prompt / set_disk_prompt : opt String,
        Cabinet / cabinet / set_cabinet : opt String,
        VolumeLabel / volume_label / set_volume_label : opt String,
        Source / source_path / set_source_path : opt Path,
        CompressionLevel / compression_level / set_compression_level : opt Number,
    }
}

tuple_definition! {
    /// A named installer property; the row id is the property name
    Property => PROPERTY, PropertyTupleFields, PropertyTuple {
        Value / value / set_value : opt String,
    }
}

tuple_definition! {
    /// Opaque binary payload embedded in the package
    Binary => BINARY, BinaryTupleFields, BinaryTuple {
        Data / data / set_data : Path,
    }
}

tuple_definition! {
    /// Icon payload referenced by shortcuts and registration rows
    Icon => ICON, IconTupleFields, IconTuple {
        Data / data / set_data : Path,
    }
}

tuple_definition! {
    /// Create an empty folder when the owning component installs
    CreateFolder => CREATE_FOLDER, CreateFolderTupleFields, CreateFolderTuple {
        DirectoryRef / directory_ref / set_directory_ref : String,
        ComponentRef / component_ref / set_component_ref : String,
    }
}

tuple_definition! {
    DuplicateFile => DUPLICATE_FILE, DuplicateFileTupleFields, DuplicateFileTuple {
        ComponentRef / component_ref / set_component_ref : String,
        FileRef / file_ref / set_file_ref : String,
        DestinationName / destination_name / set_destination_name : opt String,
        DestinationFolder / destination_folder / set_destination_folder : opt String,
    }
}

tuple_definition! {
    MoveFile => MOVE_FILE, MoveFileTupleFields, MoveFileTuple {
        ComponentRef / component_ref / set_component_ref : String,
        SourceName / source_name / set_source_name : opt String,
        DestName / dest_name / set_dest_name : opt String,
        SourceFolder / source_folder / set_source_folder : opt String,
        DestFolder / dest_folder / set_dest_folder : String,
        Delete / delete / set_delete : Bool,
    }
}

tuple_definition! {
    /// Remove a file at install or uninstall time
    RemoveFile => REMOVE_FILE, RemoveFileTupleFields, RemoveFileTuple {
        ComponentRef / component_ref / set_component_ref : String,
        FileName / file_name / set_file_name : opt String,
        DirPropertyRef / dir_property_ref / set_dir_property_ref : String,
        OnInstall / on_install / set_on_install : opt Bool,
        OnUninstall / on_uninstall / set_on_uninstall : opt Bool,
    }
}

tuple_definition! {
    RemoveFolder => REMOVE_FOLDER, RemoveFolderTupleFields, RemoveFolderTuple {
        ComponentRef / component_ref / set_component_ref : String,
        DirPropertyRef / dir_property_ref / set_dir_property_ref : String,
        OnInstall / on_install / set_on_install : opt Bool,
        OnUninstall / on_uninstall / set_on_uninstall : opt Bool,
    }
}

tuple_definition! {
    /// Disk-cost reservation for a directory, in bytes
    ReserveCost => RESERVE_COST, ReserveCostTupleFields, ReserveCostTuple {
        ComponentRef / component_ref / set_component_ref : String,
        ReserveFolder / reserve_folder / set_reserve_folder : String,
        ReserveLocal / reserve_local / set_reserve_local : Number,
        ReserveSource / reserve_source / set_reserve_source : Number,
    }
}

tuple_definition! {
    Shortcut => SHORTCUT, ShortcutTupleFields, ShortcutTuple {
        DirectoryRef / directory_ref / set_directory_ref : String,
        Name / name / set_name : String,
        ShortName / short_name / set_short_name : opt String,
        ComponentRef / component_ref / set_component_ref : String,
        Target / target / set_target : String,
        Arguments / arguments / set_arguments : opt String,
        Description / description / set_description : opt String,
        Hotkey / hotkey / set_hotkey : opt Number,
        IconRef / icon_ref / set_icon_ref : opt String,
        IconIndex / icon_index / set_icon_index : opt Number,
        Show / show / set_show : opt Number,
        WorkingDirectory / working_directory / set_working_directory : opt String,
    }
}

tuple_definition! {
    /// Environment-variable edit applied with the owning component
    Environment => ENVIRONMENT, EnvironmentTupleFields, EnvironmentTuple {
        Name / name / set_name : String,
        Value / value / set_value : opt String,
        Separator / separator / set_separator : opt String,
        Action / action / set_action : Number,
        Part / part / set_part : Number,
        Permanent / permanent / set_permanent : Bool,
        System / system / set_system : Bool,
        ComponentRef / component_ref / set_component_ref : String,
    }
}

tuple_definition! {
    /// Feature-level condition adjusting the install level
    Condition => CONDITION, ConditionTupleFields, ConditionTuple {
        FeatureRef / feature_ref / set_feature_ref : String,
        Level / level / set_level : Number,
        Condition / condition / set_condition : opt String,
    }
}

tuple_definition! {
    /// Condition the whole installation refuses to start without
    LaunchCondition => LAUNCH_CONDITION, LaunchConditionTupleFields, LaunchConditionTuple {
        Condition / condition / set_condition : String,
        Description / description / set_description : String,
    }
}

tuple_definition! {
    /// Detection row for a related product version range
    Upgrade => UPGRADE, UpgradeTupleFields, UpgradeTuple {
        UpgradeCode / upgrade_code / set_upgrade_code : String,
        VersionMin / version_min / set_version_min : opt String,
        VersionMax / version_max / set_version_max : opt String,
        Language / language / set_language : opt String,
        ExcludeLanguages / exclude_languages / set_exclude_languages : Bool,
        MigrateFeatures / migrate_features / set_migrate_features : Bool,
        OnlyDetect / only_detect / set_only_detect : Bool,
        Remove / remove / set_remove : opt String,
        /// Property the detected product code is written into
        ActionProperty / action_property / set_action_property : String,
    }
}
